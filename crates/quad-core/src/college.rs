//! College — a directory entry for a member institution.
//!
//! Courses, contact details, important dates, and volunteers are embedded
//! documents: they live and die with the college record and are stored as
//! JSON columns by the SQLite backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── Embedded documents ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseKind {
  Undergraduate,
  Postgraduate,
  Diploma,
}

/// A course offered by the college.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
  pub name:        String,
  pub kind:        CourseKind,
  pub duration:    String,
  pub eligibility: String,
  pub seats:       u32,
  /// Free text — fee structures vary too much for a numeric field.
  pub fees:        String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactInfo {
  pub email:    Option<String>,
  pub phone:    Option<String>,
  pub website:  Option<String>,
  pub whatsapp: Option<String>,
}

/// An admissions-calendar entry shown on the college page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportantDate {
  pub label:       String,
  pub date:        String,
  pub description: Option<String>,
}

/// A student contact listed on the college page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Volunteer {
  pub name:        String,
  pub phone:       String,
  pub course:      String,
  /// e.g. "Student Coordinator", "Alumni".
  pub designation: Option<String>,
}

// ─── College ─────────────────────────────────────────────────────────────────

/// A member institution. `slug` is the unique URL identifier.
///
/// `president_id` is a weak reference to a [`crate::user::User`]: a lookup
/// hint, not ownership. It is set when a president account is created or
/// reassigned and is not cleared automatically if that account goes away.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct College {
  pub college_id:      Uuid,
  pub name:            String,
  pub slug:            String,
  pub short_name:      Option<String>,
  pub location:        Option<String>,
  pub description:     Option<String>,
  pub established:     Option<String>,
  pub accreditation:   Option<String>,
  pub banner_color:    Option<String>,
  pub logo:            Option<String>,
  pub highlights:      Vec<String>,
  pub contact:         Option<ContactInfo>,
  pub courses:         Vec<Course>,
  pub important_dates: Vec<ImportantDate>,
  pub volunteers:      Vec<Volunteer>,
  pub president_id:    Option<Uuid>,
  pub created_at:      DateTime<Utc>,
  pub updated_at:      DateTime<Utc>,
}

/// The public subset exposed to unauthenticated directory listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollegeSummary {
  pub college_id: Uuid,
  pub name:       String,
  pub short_name: Option<String>,
}

impl College {
  pub fn summary(&self) -> CollegeSummary {
    CollegeSummary {
      college_id: self.college_id,
      name:       self.name.clone(),
      short_name: self.short_name.clone(),
    }
  }
}

// ─── Store inputs ────────────────────────────────────────────────────────────

/// Input to [`crate::store::PortalStore::create_college`].
#[derive(Debug, Clone)]
pub struct NewCollege {
  pub name:            String,
  pub slug:            String,
  pub short_name:      Option<String>,
  pub location:        Option<String>,
  pub description:     Option<String>,
  pub established:     Option<String>,
  pub accreditation:   Option<String>,
  pub banner_color:    Option<String>,
  pub logo:            Option<String>,
  pub highlights:      Vec<String>,
  pub contact:         Option<ContactInfo>,
  pub courses:         Vec<Course>,
  pub important_dates: Vec<ImportantDate>,
  pub volunteers:      Vec<Volunteer>,
}

impl NewCollege {
  /// Convenience constructor with only the required fields set.
  pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
    Self {
      name:            name.into(),
      slug:            slug.into(),
      short_name:      None,
      location:        None,
      description:     None,
      established:     None,
      accreditation:   None,
      banner_color:    None,
      logo:            None,
      highlights:      Vec::new(),
      contact:         None,
      courses:         Vec::new(),
      important_dates: Vec::new(),
      volunteers:      Vec::new(),
    }
  }
}

/// Partial update for an existing college. `None` leaves a field untouched;
/// the slug is immutable once assigned.
#[derive(Debug, Clone, Default)]
pub struct CollegeUpdate {
  pub name:            Option<String>,
  pub short_name:      Option<String>,
  pub location:        Option<String>,
  pub description:     Option<String>,
  pub established:     Option<String>,
  pub accreditation:   Option<String>,
  pub banner_color:    Option<String>,
  pub logo:            Option<String>,
  pub highlights:      Option<Vec<String>>,
  pub contact:         Option<ContactInfo>,
  pub courses:         Option<Vec<Course>>,
  pub important_dates: Option<Vec<ImportantDate>>,
  pub volunteers:      Option<Vec<Volunteer>>,
}
