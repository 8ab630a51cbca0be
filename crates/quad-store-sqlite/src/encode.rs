//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! All timestamps are stored as RFC 3339 strings. Embedded documents
//! (location, contact, courses, important dates, volunteers) are stored as
//! compact JSON. UUIDs are stored as hyphenated lowercase strings.

use chrono::{DateTime, Utc};
use quad_core::{
  announcement::Announcement,
  college::{College, ContactInfo, Course, ImportantDate, Volunteer},
  role::RoleMeta,
  user::{BloodGroup, Location, Role, User},
};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

pub fn decode_opt_uuid(s: Option<&str>) -> Result<Option<Uuid>> {
  s.map(decode_uuid).transpose()
}

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Enums ───────────────────────────────────────────────────────────────────

pub fn encode_role(r: Role) -> &'static str { r.as_str() }

pub fn decode_role(s: &str) -> Result<Role> { Ok(Role::parse(s)?) }

pub fn encode_blood_group(bg: BloodGroup) -> &'static str { bg.as_str() }

pub fn decode_blood_group(s: &str) -> Result<BloodGroup> {
  Ok(BloodGroup::parse(s)?)
}

// ─── Embedded documents ──────────────────────────────────────────────────────

pub fn encode_location(l: &Location) -> Result<String> {
  Ok(serde_json::to_string(l)?)
}

pub fn encode_contact(c: &ContactInfo) -> Result<String> {
  Ok(serde_json::to_string(c)?)
}

pub fn encode_json_list<T: serde::Serialize>(items: &[T]) -> Result<String> {
  Ok(serde_json::to_string(items)?)
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `users` row.
pub struct RawUser {
  pub user_id:             String,
  pub name:                String,
  pub email:               String,
  pub password_hash:       String,
  pub image:               Option<String>,
  pub phone:               Option<String>,
  pub role:                String,
  pub rejection_reason:    Option<String>,
  pub college_id:          Option<String>,
  pub other_college_name:  Option<String>,
  pub blood_group:         Option<String>,
  pub is_blood_donor:      bool,
  pub is_campus_volunteer: bool,
  pub location:            Option<String>,
  pub created_at:          String,
  pub updated_at:          String,
}

impl RawUser {
  /// Column list matching the field order expected by [`Self::from_row`].
  pub const COLUMNS: &'static str = "user_id, name, email, password_hash, \
     image, phone, role, rejection_reason, college_id, other_college_name, \
     blood_group, is_blood_donor, is_campus_volunteer, location, \
     created_at, updated_at";

  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      user_id:             row.get(0)?,
      name:                row.get(1)?,
      email:               row.get(2)?,
      password_hash:       row.get(3)?,
      image:               row.get(4)?,
      phone:               row.get(5)?,
      role:                row.get(6)?,
      rejection_reason:    row.get(7)?,
      college_id:          row.get(8)?,
      other_college_name:  row.get(9)?,
      blood_group:         row.get(10)?,
      is_blood_donor:      row.get(11)?,
      is_campus_volunteer: row.get(12)?,
      location:            row.get(13)?,
      created_at:          row.get(14)?,
      updated_at:          row.get(15)?,
    })
  }

  pub fn into_user(self) -> Result<User> {
    let location = self
      .location
      .as_deref()
      .map(serde_json::from_str::<Location>)
      .transpose()?;

    let blood_group = self
      .blood_group
      .as_deref()
      .map(decode_blood_group)
      .transpose()?;

    Ok(User {
      user_id:             decode_uuid(&self.user_id)?,
      name:                self.name,
      email:               self.email,
      password_hash:       self.password_hash,
      image:               self.image,
      phone:               self.phone,
      role:                decode_role(&self.role)?,
      rejection_reason:    self.rejection_reason,
      college_id:          decode_opt_uuid(self.college_id.as_deref())?,
      other_college_name:  self.other_college_name,
      blood_group,
      is_blood_donor:      self.is_blood_donor,
      is_campus_volunteer: self.is_campus_volunteer,
      location,
      created_at:          decode_dt(&self.created_at)?,
      updated_at:          decode_dt(&self.updated_at)?,
    })
  }
}

/// Raw strings read directly from a `colleges` row.
pub struct RawCollege {
  pub college_id:      String,
  pub name:            String,
  pub slug:            String,
  pub short_name:      Option<String>,
  pub location:        Option<String>,
  pub description:     Option<String>,
  pub established:     Option<String>,
  pub accreditation:   Option<String>,
  pub banner_color:    Option<String>,
  pub logo:            Option<String>,
  pub highlights:      String,
  pub contact:         Option<String>,
  pub courses:         String,
  pub important_dates: String,
  pub volunteers:      String,
  pub president_id:    Option<String>,
  pub created_at:      String,
  pub updated_at:      String,
}

impl RawCollege {
  pub const COLUMNS: &'static str = "college_id, name, slug, short_name, \
     location, description, established, accreditation, banner_color, logo, \
     highlights, contact, courses, important_dates, volunteers, \
     president_id, created_at, updated_at";

  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      college_id:      row.get(0)?,
      name:            row.get(1)?,
      slug:            row.get(2)?,
      short_name:      row.get(3)?,
      location:        row.get(4)?,
      description:     row.get(5)?,
      established:     row.get(6)?,
      accreditation:   row.get(7)?,
      banner_color:    row.get(8)?,
      logo:            row.get(9)?,
      highlights:      row.get(10)?,
      contact:         row.get(11)?,
      courses:         row.get(12)?,
      important_dates: row.get(13)?,
      volunteers:      row.get(14)?,
      president_id:    row.get(15)?,
      created_at:      row.get(16)?,
      updated_at:      row.get(17)?,
    })
  }

  pub fn into_college(self) -> Result<College> {
    let contact = self
      .contact
      .as_deref()
      .map(serde_json::from_str::<ContactInfo>)
      .transpose()?;

    Ok(College {
      college_id:      decode_uuid(&self.college_id)?,
      name:            self.name,
      slug:            self.slug,
      short_name:      self.short_name,
      location:        self.location,
      description:     self.description,
      established:     self.established,
      accreditation:   self.accreditation,
      banner_color:    self.banner_color,
      logo:            self.logo,
      highlights:      serde_json::from_str::<Vec<String>>(&self.highlights)?,
      contact,
      courses:         serde_json::from_str::<Vec<Course>>(&self.courses)?,
      important_dates: serde_json::from_str::<Vec<ImportantDate>>(
        &self.important_dates,
      )?,
      volunteers:      serde_json::from_str::<Vec<Volunteer>>(&self.volunteers)?,
      president_id:    decode_opt_uuid(self.president_id.as_deref())?,
      created_at:      decode_dt(&self.created_at)?,
      updated_at:      decode_dt(&self.updated_at)?,
    })
  }
}

/// Raw strings read directly from an `announcements` row.
pub struct RawAnnouncement {
  pub announcement_id: String,
  pub text:            String,
  pub link:            Option<String>,
  pub is_active:       bool,
  pub priority:        i64,
  pub author_id:       Option<String>,
  pub created_at:      String,
}

impl RawAnnouncement {
  pub const COLUMNS: &'static str =
    "announcement_id, text, link, is_active, priority, author_id, created_at";

  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      announcement_id: row.get(0)?,
      text:            row.get(1)?,
      link:            row.get(2)?,
      is_active:       row.get(3)?,
      priority:        row.get(4)?,
      author_id:       row.get(5)?,
      created_at:      row.get(6)?,
    })
  }

  pub fn into_announcement(self) -> Result<Announcement> {
    Ok(Announcement {
      announcement_id: decode_uuid(&self.announcement_id)?,
      text:            self.text,
      link:            self.link,
      is_active:       self.is_active,
      priority:        self.priority,
      author_id:       decode_opt_uuid(self.author_id.as_deref())?,
      created_at:      decode_dt(&self.created_at)?,
    })
  }
}

/// Raw strings read directly from a `roles` row.
pub struct RawRole {
  pub role_id:     String,
  pub name:        String,
  pub description: Option<String>,
  pub color:       String,
  pub is_static:   bool,
  pub created_at:  String,
}

impl RawRole {
  pub const COLUMNS: &'static str =
    "role_id, name, description, color, is_static, created_at";

  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      role_id:     row.get(0)?,
      name:        row.get(1)?,
      description: row.get(2)?,
      color:       row.get(3)?,
      is_static:   row.get(4)?,
      created_at:  row.get(5)?,
    })
  }

  pub fn into_role_meta(self) -> Result<RoleMeta> {
    Ok(RoleMeta {
      role_id:     decode_uuid(&self.role_id)?,
      name:        self.name,
      description: self.description,
      color:       self.color,
      is_static:   self.is_static,
      created_at:  decode_dt(&self.created_at)?,
    })
  }
}
