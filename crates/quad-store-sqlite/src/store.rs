//! [`SqliteStore`] — the SQLite implementation of [`PortalStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use quad_core::{
  announcement::{Announcement, NewAnnouncement},
  college::{College, CollegeSummary, CollegeUpdate, NewCollege},
  role::{NewRoleMeta, RoleMeta, STATIC_ROLES},
  store::{PortalStore, UserQuery},
  user::{NewUser, ProfileUpdate, User, UserModeration},
};

use crate::{
  Error, Result,
  encode::{
    RawAnnouncement, RawCollege, RawRole, RawUser, encode_blood_group,
    encode_contact, encode_dt, encode_json_list, encode_location, encode_role,
    encode_uuid,
  },
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Quad portal store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. The handle
/// is created once at startup and injected into request handlers; there is
/// no module-level global and no explicit teardown.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path`, run schema initialisation, and
  /// seed the four static roles if the role table is empty.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    self.seed_static_roles().await
  }

  /// Insert the built-in roles; `INSERT OR IGNORE` keeps this idempotent
  /// across restarts (name is UNIQUE).
  async fn seed_static_roles(&self) -> Result<()> {
    let now = encode_dt(Utc::now());
    self
      .conn
      .call(move |conn| {
        for (name, description, color) in STATIC_ROLES {
          conn.execute(
            "INSERT OR IGNORE INTO roles
               (role_id, name, description, color, is_static, created_at)
             VALUES (?1, ?2, ?3, ?4, 1, ?5)",
            rusqlite::params![
              encode_uuid(Uuid::new_v4()),
              name,
              description,
              color,
              now
            ],
          )?;
        }
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Write every mutable user column back in one statement. Concurrent
  /// writers are last-write-wins at the row level, matching the original
  /// document-store behaviour.
  async fn write_user(&self, user: &User) -> Result<()> {
    let user_id       = encode_uuid(user.user_id);
    let name          = user.name.clone();
    let email         = user.email.clone();
    let password_hash = user.password_hash.clone();
    let image         = user.image.clone();
    let phone         = user.phone.clone();
    let role          = encode_role(user.role).to_owned();
    let rejection     = user.rejection_reason.clone();
    let college_id    = user.college_id.map(encode_uuid);
    let other_college = user.other_college_name.clone();
    let blood_group   = user.blood_group.map(|bg| encode_blood_group(bg).to_owned());
    let location      = user.location.as_ref().map(encode_location).transpose()?;
    let updated_at    = encode_dt(user.updated_at);
    let is_donor      = user.is_blood_donor;
    let is_volunteer  = user.is_campus_volunteer;

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "UPDATE users SET
             name = ?2, email = ?3, password_hash = ?4, image = ?5,
             phone = ?6, role = ?7, rejection_reason = ?8, college_id = ?9,
             other_college_name = ?10, blood_group = ?11,
             is_blood_donor = ?12, is_campus_volunteer = ?13, location = ?14,
             updated_at = ?15
           WHERE user_id = ?1",
          rusqlite::params![
            user_id,
            name,
            email,
            password_hash,
            image,
            phone,
            role,
            rejection,
            college_id,
            other_college,
            blood_group,
            is_donor,
            is_volunteer,
            location,
            updated_at
          ],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Insert a fully-built [`User`] row. Shared by `create_user` and the
  /// transactional president path (which inlines the same statement).
  async fn insert_user(&self, user: &User) -> Result<()> {
    let params = user_insert_params(user)?;
    self
      .conn
      .call(move |conn| {
        conn.execute(USER_INSERT_SQL, rusqlite::params_from_iter(params))?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── Insert plumbing ─────────────────────────────────────────────────────────

const USER_INSERT_SQL: &str = "INSERT INTO users (
     user_id, name, email, password_hash, image, phone, role,
     rejection_reason, college_id, other_college_name, blood_group,
     is_blood_donor, is_campus_volunteer, location, created_at, updated_at
   ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)";

/// Flatten a [`User`] into the positional params for [`USER_INSERT_SQL`].
fn user_insert_params(user: &User) -> Result<Vec<Option<String>>> {
  Ok(vec![
    Some(encode_uuid(user.user_id)),
    Some(user.name.clone()),
    Some(user.email.clone()),
    Some(user.password_hash.clone()),
    user.image.clone(),
    user.phone.clone(),
    Some(encode_role(user.role).to_owned()),
    user.rejection_reason.clone(),
    user.college_id.map(encode_uuid),
    user.other_college_name.clone(),
    user.blood_group.map(|bg| encode_blood_group(bg).to_owned()),
    Some(if user.is_blood_donor { "1" } else { "0" }.to_owned()),
    Some(if user.is_campus_volunteer { "1" } else { "0" }.to_owned()),
    user.location.as_ref().map(encode_location).transpose()?,
    Some(encode_dt(user.created_at)),
    Some(encode_dt(user.updated_at)),
  ])
}

/// Materialise a [`User`] from a [`NewUser`] with server-assigned id and
/// timestamps.
fn build_user(input: NewUser) -> User {
  let now = Utc::now();
  User {
    user_id:             Uuid::new_v4(),
    name:                input.name,
    email:               input.email,
    password_hash:       input.password_hash,
    image:               None,
    phone:               input.phone,
    role:                input.role,
    rejection_reason:    None,
    college_id:          input.college_id,
    other_college_name:  input.other_college_name,
    blood_group:         input.blood_group,
    is_blood_donor:      input.is_blood_donor,
    is_campus_volunteer: false,
    location:            input.location,
    created_at:          now,
    updated_at:          now,
  }
}

// ─── PortalStore impl ────────────────────────────────────────────────────────

impl PortalStore for SqliteStore {
  type Error = Error;

  // ── Users ─────────────────────────────────────────────────────────────

  async fn create_user(&self, input: NewUser) -> Result<User> {
    let user = build_user(input);
    self.insert_user(&user).await?;
    Ok(user)
  }

  async fn get_user(&self, id: Uuid) -> Result<Option<User>> {
    let id_str = encode_uuid(id);
    let sql = format!(
      "SELECT {} FROM users WHERE user_id = ?1",
      RawUser::COLUMNS
    );
    let raw: Option<RawUser> = self
      .conn
      .call(move |conn| {
        let raw = conn
          .query_row(&sql, rusqlite::params![id_str], RawUser::from_row)
          .optional()?;
        Ok(raw)
      })
      .await?;
    raw.map(RawUser::into_user).transpose()
  }

  async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
    let email = email.to_owned();
    let sql = format!(
      "SELECT {} FROM users WHERE email = ?1 COLLATE NOCASE",
      RawUser::COLUMNS
    );
    let raw: Option<RawUser> = self
      .conn
      .call(move |conn| {
        let raw = conn
          .query_row(&sql, rusqlite::params![email], RawUser::from_row)
          .optional()?;
        Ok(raw)
      })
      .await?;
    raw.map(RawUser::into_user).transpose()
  }

  async fn list_users(&self, query: &UserQuery) -> Result<Vec<User>> {
    let mut sql = format!("SELECT {} FROM users", RawUser::COLUMNS);
    let mut clauses: Vec<String> = Vec::new();
    let mut params: Vec<String> = Vec::new();

    if !query.roles.is_empty() {
      let placeholders = vec!["?"; query.roles.len()].join(", ");
      clauses.push(format!("role IN ({placeholders})"));
      params.extend(query.roles.iter().map(|r| r.as_str().to_owned()));
    }
    if let Some(college_id) = query.college_id {
      clauses.push("college_id = ?".to_owned());
      params.push(encode_uuid(college_id));
    }
    if query.donors_only {
      clauses.push("is_blood_donor = 1".to_owned());
    }
    if !clauses.is_empty() {
      sql.push_str(" WHERE ");
      sql.push_str(&clauses.join(" AND "));
    }
    sql.push_str(" ORDER BY created_at DESC");

    let raws: Vec<RawUser> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let raws = stmt
          .query_map(rusqlite::params_from_iter(params), RawUser::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(raws)
      })
      .await?;
    raws.into_iter().map(RawUser::into_user).collect()
  }

  async fn update_profile(&self, id: Uuid, update: ProfileUpdate) -> Result<User> {
    let mut user = self.get_user(id).await?.ok_or(Error::UserNotFound(id))?;

    if let Some(name) = update.name {
      user.name = name;
    }
    if let Some(phone) = update.phone {
      user.phone = Some(phone);
    }
    if let Some(image) = update.image {
      user.image = Some(image);
    }
    if let Some(blood_group) = update.blood_group {
      user.blood_group = Some(blood_group);
    }
    if let Some(is_blood_donor) = update.is_blood_donor {
      user.is_blood_donor = is_blood_donor;
    }
    if let Some(is_campus_volunteer) = update.is_campus_volunteer {
      user.is_campus_volunteer = is_campus_volunteer;
    }
    if let Some(location) = update.location {
      user.location = Some(location);
    }
    if let Some(college_id) = update.college_id {
      user.college_id = Some(college_id);
    }
    if let Some(other) = update.other_college_name {
      user.other_college_name = Some(other);
    }
    user.updated_at = Utc::now();

    self.write_user(&user).await?;
    Ok(user)
  }

  async fn moderate_user(&self, id: Uuid, moderation: UserModeration) -> Result<User> {
    let mut user = self.get_user(id).await?.ok_or(Error::UserNotFound(id))?;

    if let Some(role) = moderation.role {
      user.role = role;
    }
    if let Some(reason) = moderation.rejection_reason {
      // An empty reason clears the stored value.
      user.rejection_reason = if reason.is_empty() { None } else { Some(reason) };
    }
    user.updated_at = Utc::now();

    self.write_user(&user).await?;
    Ok(user)
  }

  async fn delete_user(&self, id: Uuid) -> Result<bool> {
    let id_str = encode_uuid(id);
    let deleted = self
      .conn
      .call(move |conn| {
        let n = conn.execute(
          "DELETE FROM users WHERE user_id = ?1",
          rusqlite::params![id_str],
        )?;
        Ok(n > 0)
      })
      .await?;
    Ok(deleted)
  }

  async fn create_president(
    &self,
    input: NewUser,
    college_id: Option<Uuid>,
  ) -> Result<User> {
    let mut user = build_user(input);
    user.college_id = college_id.or(user.college_id);
    let params = user_insert_params(&user)?;
    let user_id_str = encode_uuid(user.user_id);
    let college_id_str = college_id.map(encode_uuid);
    let now = encode_dt(Utc::now());

    // Insert and link in one transaction so a failed college update cannot
    // leave an unlinked president behind.
    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute(USER_INSERT_SQL, rusqlite::params_from_iter(params))?;
        if let Some(college_id_str) = college_id_str {
          tx.execute(
            "UPDATE colleges SET president_id = ?2, updated_at = ?3
             WHERE college_id = ?1",
            rusqlite::params![college_id_str, user_id_str, now],
          )?;
        }
        tx.commit()?;
        Ok(())
      })
      .await?;
    Ok(user)
  }

  async fn update_president(
    &self,
    id: Uuid,
    name: String,
    email: String,
    password_hash: Option<String>,
  ) -> Result<User> {
    let mut user = self.get_user(id).await?.ok_or(Error::UserNotFound(id))?;
    user.name = name;
    user.email = email;
    if let Some(hash) = password_hash {
      user.password_hash = hash;
    }
    user.updated_at = Utc::now();
    self.write_user(&user).await?;
    Ok(user)
  }

  // ── Colleges ──────────────────────────────────────────────────────────

  async fn create_college(&self, input: NewCollege) -> Result<College> {
    let now = Utc::now();
    let college = College {
      college_id:      Uuid::new_v4(),
      name:            input.name,
      slug:            input.slug,
      short_name:      input.short_name,
      location:        input.location,
      description:     input.description,
      established:     input.established,
      accreditation:   input.accreditation,
      banner_color:    input.banner_color,
      logo:            input.logo,
      highlights:      input.highlights,
      contact:         input.contact,
      courses:         input.courses,
      important_dates: input.important_dates,
      volunteers:      input.volunteers,
      president_id:    None,
      created_at:      now,
      updated_at:      now,
    };
    self.write_college(&college, true).await?;
    Ok(college)
  }

  async fn get_college(&self, id: Uuid) -> Result<Option<College>> {
    let id_str = encode_uuid(id);
    let sql = format!(
      "SELECT {} FROM colleges WHERE college_id = ?1",
      RawCollege::COLUMNS
    );
    let raw: Option<RawCollege> = self
      .conn
      .call(move |conn| {
        let raw = conn
          .query_row(&sql, rusqlite::params![id_str], RawCollege::from_row)
          .optional()?;
        Ok(raw)
      })
      .await?;
    raw.map(RawCollege::into_college).transpose()
  }

  async fn find_college_by_slug(&self, slug: &str) -> Result<Option<College>> {
    let slug = slug.to_owned();
    let sql = format!(
      "SELECT {} FROM colleges WHERE slug = ?1",
      RawCollege::COLUMNS
    );
    let raw: Option<RawCollege> = self
      .conn
      .call(move |conn| {
        let raw = conn
          .query_row(&sql, rusqlite::params![slug], RawCollege::from_row)
          .optional()?;
        Ok(raw)
      })
      .await?;
    raw.map(RawCollege::into_college).transpose()
  }

  async fn list_colleges(&self) -> Result<Vec<College>> {
    let sql = format!(
      "SELECT {} FROM colleges ORDER BY name ASC",
      RawCollege::COLUMNS
    );
    let raws: Vec<RawCollege> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let raws = stmt
          .query_map([], RawCollege::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(raws)
      })
      .await?;
    raws.into_iter().map(RawCollege::into_college).collect()
  }

  async fn list_college_summaries(&self) -> Result<Vec<CollegeSummary>> {
    let raws: Vec<(String, String, Option<String>)> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT college_id, name, short_name FROM colleges ORDER BY name ASC",
        )?;
        let raws = stmt
          .query_map([], |row| {
            Ok((row.get(0)?, row.get(1)?, row.get(2)?))
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(raws)
      })
      .await?;

    raws
      .into_iter()
      .map(|(id, name, short_name)| {
        Ok(CollegeSummary {
          college_id: crate::encode::decode_uuid(&id)?,
          name,
          short_name,
        })
      })
      .collect()
  }

  async fn update_college(&self, id: Uuid, update: CollegeUpdate) -> Result<College> {
    let mut college = self
      .get_college(id)
      .await?
      .ok_or(Error::CollegeNotFound(id))?;

    if let Some(name) = update.name {
      college.name = name;
    }
    if let Some(short_name) = update.short_name {
      college.short_name = Some(short_name);
    }
    if let Some(location) = update.location {
      college.location = Some(location);
    }
    if let Some(description) = update.description {
      college.description = Some(description);
    }
    if let Some(established) = update.established {
      college.established = Some(established);
    }
    if let Some(accreditation) = update.accreditation {
      college.accreditation = Some(accreditation);
    }
    if let Some(banner_color) = update.banner_color {
      college.banner_color = Some(banner_color);
    }
    if let Some(logo) = update.logo {
      college.logo = Some(logo);
    }
    if let Some(highlights) = update.highlights {
      college.highlights = highlights;
    }
    if let Some(contact) = update.contact {
      college.contact = Some(contact);
    }
    if let Some(courses) = update.courses {
      college.courses = courses;
    }
    if let Some(important_dates) = update.important_dates {
      college.important_dates = important_dates;
    }
    if let Some(volunteers) = update.volunteers {
      college.volunteers = volunteers;
    }
    college.updated_at = Utc::now();

    self.write_college(&college, false).await?;
    Ok(college)
  }

  // ── Announcements ─────────────────────────────────────────────────────

  async fn list_announcements(&self, active_only: bool) -> Result<Vec<Announcement>> {
    let mut sql = format!("SELECT {} FROM announcements", RawAnnouncement::COLUMNS);
    if active_only {
      sql.push_str(" WHERE is_active = 1");
    }
    sql.push_str(" ORDER BY priority DESC, created_at DESC");

    let raws: Vec<RawAnnouncement> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let raws = stmt
          .query_map([], RawAnnouncement::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(raws)
      })
      .await?;
    raws
      .into_iter()
      .map(RawAnnouncement::into_announcement)
      .collect()
  }

  async fn create_announcement(&self, input: NewAnnouncement) -> Result<Announcement> {
    let announcement = Announcement {
      announcement_id: Uuid::new_v4(),
      text:            input.text,
      link:            input.link,
      is_active:       true,
      priority:        input.priority,
      author_id:       input.author_id,
      created_at:      Utc::now(),
    };

    let id_str     = encode_uuid(announcement.announcement_id);
    let text       = announcement.text.clone();
    let link       = announcement.link.clone();
    let priority   = announcement.priority;
    let author_str = announcement.author_id.map(encode_uuid);
    let created_at = encode_dt(announcement.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO announcements
             (announcement_id, text, link, is_active, priority, author_id, created_at)
           VALUES (?1, ?2, ?3, 1, ?4, ?5, ?6)",
          rusqlite::params![id_str, text, link, priority, author_str, created_at],
        )?;
        Ok(())
      })
      .await?;
    Ok(announcement)
  }

  async fn delete_announcement(&self, id: Uuid) -> Result<bool> {
    let id_str = encode_uuid(id);
    let deleted = self
      .conn
      .call(move |conn| {
        let n = conn.execute(
          "DELETE FROM announcements WHERE announcement_id = ?1",
          rusqlite::params![id_str],
        )?;
        Ok(n > 0)
      })
      .await?;
    Ok(deleted)
  }

  // ── Role metadata ─────────────────────────────────────────────────────

  async fn list_roles(&self) -> Result<Vec<RoleMeta>> {
    let sql = format!(
      "SELECT {} FROM roles ORDER BY created_at ASC",
      RawRole::COLUMNS
    );
    let raws: Vec<RawRole> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let raws = stmt
          .query_map([], RawRole::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(raws)
      })
      .await?;
    raws.into_iter().map(RawRole::into_role_meta).collect()
  }

  async fn get_role(&self, id: Uuid) -> Result<Option<RoleMeta>> {
    let id_str = encode_uuid(id);
    let sql = format!("SELECT {} FROM roles WHERE role_id = ?1", RawRole::COLUMNS);
    let raw: Option<RawRole> = self
      .conn
      .call(move |conn| {
        let raw = conn
          .query_row(&sql, rusqlite::params![id_str], RawRole::from_row)
          .optional()?;
        Ok(raw)
      })
      .await?;
    raw.map(RawRole::into_role_meta).transpose()
  }

  async fn find_role_by_name(&self, name: &str) -> Result<Option<RoleMeta>> {
    let name = name.to_owned();
    let sql = format!("SELECT {} FROM roles WHERE name = ?1", RawRole::COLUMNS);
    let raw: Option<RawRole> = self
      .conn
      .call(move |conn| {
        let raw = conn
          .query_row(&sql, rusqlite::params![name], RawRole::from_row)
          .optional()?;
        Ok(raw)
      })
      .await?;
    raw.map(RawRole::into_role_meta).transpose()
  }

  async fn create_role(&self, input: NewRoleMeta) -> Result<RoleMeta> {
    let role = RoleMeta {
      role_id:     Uuid::new_v4(),
      name:        input.name,
      description: input.description,
      color:       input.color,
      is_static:   false,
      created_at:  Utc::now(),
    };

    let id_str      = encode_uuid(role.role_id);
    let name        = role.name.clone();
    let description = role.description.clone();
    let color       = role.color.clone();
    let created_at  = encode_dt(role.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO roles (role_id, name, description, color, is_static, created_at)
           VALUES (?1, ?2, ?3, ?4, 0, ?5)",
          rusqlite::params![id_str, name, description, color, created_at],
        )?;
        Ok(())
      })
      .await?;
    Ok(role)
  }

  async fn delete_role(&self, id: Uuid) -> Result<bool> {
    let id_str = encode_uuid(id);
    let deleted = self
      .conn
      .call(move |conn| {
        let n = conn.execute(
          "DELETE FROM roles WHERE role_id = ?1",
          rusqlite::params![id_str],
        )?;
        Ok(n > 0)
      })
      .await?;
    Ok(deleted)
  }
}

// ─── College write plumbing ──────────────────────────────────────────────────

impl SqliteStore {
  /// Insert or fully rewrite a college row. `insert` selects between the
  /// INSERT and UPDATE statements; both carry every column so the embedded
  /// JSON documents are always consistent with the in-memory record.
  async fn write_college(&self, college: &College, insert: bool) -> Result<()> {
    let params: Vec<Option<String>> = vec![
      Some(encode_uuid(college.college_id)),
      Some(college.name.clone()),
      Some(college.slug.clone()),
      college.short_name.clone(),
      college.location.clone(),
      college.description.clone(),
      college.established.clone(),
      college.accreditation.clone(),
      college.banner_color.clone(),
      college.logo.clone(),
      Some(encode_json_list(&college.highlights)?),
      college.contact.as_ref().map(encode_contact).transpose()?,
      Some(encode_json_list(&college.courses)?),
      Some(encode_json_list(&college.important_dates)?),
      Some(encode_json_list(&college.volunteers)?),
      college.president_id.map(encode_uuid),
      Some(encode_dt(college.created_at)),
      Some(encode_dt(college.updated_at)),
    ];

    let sql = if insert {
      "INSERT INTO colleges (
         college_id, name, slug, short_name, location, description,
         established, accreditation, banner_color, logo, highlights, contact,
         courses, important_dates, volunteers, president_id, created_at,
         updated_at
       ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18)"
    } else {
      "UPDATE colleges SET
         name = ?2, slug = ?3, short_name = ?4, location = ?5,
         description = ?6, established = ?7, accreditation = ?8,
         banner_color = ?9, logo = ?10, highlights = ?11, contact = ?12,
         courses = ?13, important_dates = ?14, volunteers = ?15,
         president_id = ?16, created_at = ?17, updated_at = ?18
       WHERE college_id = ?1"
    };

    self
      .conn
      .call(move |conn| {
        conn.execute(sql, rusqlite::params_from_iter(params))?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}
