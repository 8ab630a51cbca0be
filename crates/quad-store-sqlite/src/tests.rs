//! Integration tests for `SqliteStore` against an in-memory database.

use quad_core::{
  announcement::NewAnnouncement,
  college::{CollegeUpdate, Course, CourseKind, NewCollege},
  role::NewRoleMeta,
  store::{PortalStore, UserQuery},
  user::{BloodGroup, Location, NewUser, ProfileUpdate, Role, UserModeration},
};
use uuid::Uuid;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory().await.expect("in-memory store")
}

fn new_user(email: &str, role: Role) -> NewUser {
  NewUser {
    name:               "Test User".into(),
    email:              email.into(),
    password_hash:      "$argon2id$v=19$m=19456,t=2,p=1$fake$fake".into(),
    role,
    college_id:         None,
    other_college_name: None,
    phone:              None,
    blood_group:        None,
    is_blood_donor:     false,
    location:           None,
  }
}

// ─── Users ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_get_user() {
  let s = store().await;

  let user = s
    .create_user(new_user("alice@example.com", Role::Unverified))
    .await
    .unwrap();
  assert_eq!(user.role, Role::Unverified);
  assert!(user.rejection_reason.is_none());

  let fetched = s.get_user(user.user_id).await.unwrap().unwrap();
  assert_eq!(fetched.user_id, user.user_id);
  assert_eq!(fetched.email, "alice@example.com");
  assert_eq!(fetched.password_hash, user.password_hash);
}

#[tokio::test]
async fn get_user_missing_returns_none() {
  let s = store().await;
  assert!(s.get_user(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn email_lookup_is_case_insensitive() {
  let s = store().await;
  s.create_user(new_user("alice@example.com", Role::Unverified))
    .await
    .unwrap();

  let found = s.find_user_by_email("ALICE@EXAMPLE.COM").await.unwrap();
  assert!(found.is_some());
  assert_eq!(found.unwrap().email, "alice@example.com");

  assert!(s.find_user_by_email("bob@example.com").await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_email_violates_unique_constraint() {
  let s = store().await;
  s.create_user(new_user("alice@example.com", Role::Unverified))
    .await
    .unwrap();

  // Differs only by case; the NOCASE unique index must still reject it.
  let result = s
    .create_user(new_user("ALICE@example.com", Role::Unverified))
    .await;
  assert!(result.is_err());
}

#[tokio::test]
async fn list_users_filters_by_role_and_college() {
  let s = store().await;
  let college = Uuid::new_v4();

  let mut in_college = new_user("member@example.com", Role::Member);
  in_college.college_id = Some(college);
  s.create_user(in_college).await.unwrap();

  s.create_user(new_user("stray@example.com", Role::Member))
    .await
    .unwrap();
  s.create_user(new_user("admin@example.com", Role::Superadmin))
    .await
    .unwrap();

  let managed = s
    .list_users(&UserQuery {
      roles: vec![Role::President, Role::Member, Role::Unverified],
      ..Default::default()
    })
    .await
    .unwrap();
  assert_eq!(managed.len(), 2);
  assert!(managed.iter().all(|u| u.role != Role::Superadmin));

  let scoped = s
    .list_users(&UserQuery {
      roles:      vec![Role::Member, Role::Unverified],
      college_id: Some(college),
      ..Default::default()
    })
    .await
    .unwrap();
  assert_eq!(scoped.len(), 1);
  assert_eq!(scoped[0].email, "member@example.com");
}

#[tokio::test]
async fn donor_query_returns_only_opted_in_donors() {
  let s = store().await;

  let mut donor = new_user("donor@example.com", Role::Member);
  donor.is_blood_donor = true;
  donor.blood_group = Some(BloodGroup::OPositive);
  donor.location = Some(Location {
    city:   "Shimla".into(),
    sector: None,
  });
  s.create_user(donor).await.unwrap();

  s.create_user(new_user("other@example.com", Role::Member))
    .await
    .unwrap();

  let mut unverified_donor = new_user("pending@example.com", Role::Unverified);
  unverified_donor.is_blood_donor = true;
  s.create_user(unverified_donor).await.unwrap();

  let donors = s
    .list_users(&UserQuery {
      roles:       vec![Role::Member, Role::President],
      donors_only: true,
      ..Default::default()
    })
    .await
    .unwrap();
  assert_eq!(donors.len(), 1);
  assert_eq!(donors[0].blood_group, Some(BloodGroup::OPositive));
  assert_eq!(donors[0].location.as_ref().unwrap().city, "Shimla");
}

#[tokio::test]
async fn profile_update_touches_only_given_fields() {
  let s = store().await;
  let user = s
    .create_user(new_user("alice@example.com", Role::Member))
    .await
    .unwrap();

  let updated = s
    .update_profile(
      user.user_id,
      ProfileUpdate {
        phone: Some("9876500000".into()),
        is_blood_donor: Some(true),
        ..Default::default()
      },
    )
    .await
    .unwrap();

  assert_eq!(updated.phone.as_deref(), Some("9876500000"));
  assert!(updated.is_blood_donor);
  // Untouched fields survive.
  assert_eq!(updated.name, "Test User");
  assert_eq!(updated.email, "alice@example.com");
  assert_eq!(updated.role, Role::Member);
}

#[tokio::test]
async fn moderation_changes_role_and_clears_rejection() {
  let s = store().await;
  let user = s
    .create_user(new_user("alice@example.com", Role::Unverified))
    .await
    .unwrap();

  let rejected = s
    .moderate_user(
      user.user_id,
      UserModeration {
        role:             None,
        rejection_reason: Some("missing student ID".into()),
      },
    )
    .await
    .unwrap();
  assert_eq!(rejected.rejection_reason.as_deref(), Some("missing student ID"));
  assert_eq!(rejected.role, Role::Unverified);

  let verified = s
    .moderate_user(
      user.user_id,
      UserModeration {
        role:             Some(Role::Member),
        rejection_reason: Some(String::new()),
      },
    )
    .await
    .unwrap();
  assert_eq!(verified.role, Role::Member);
  assert!(verified.rejection_reason.is_none());
}

#[tokio::test]
async fn delete_user_reports_whether_a_row_existed() {
  let s = store().await;
  let user = s
    .create_user(new_user("alice@example.com", Role::Member))
    .await
    .unwrap();

  assert!(s.delete_user(user.user_id).await.unwrap());
  assert!(s.get_user(user.user_id).await.unwrap().is_none());
  assert!(!s.delete_user(user.user_id).await.unwrap());
}

// ─── President creation ──────────────────────────────────────────────────────

#[tokio::test]
async fn create_president_links_college_atomically() {
  let s = store().await;
  let college = s
    .create_college(NewCollege::new("Government College", "gc-shimla"))
    .await
    .unwrap();
  assert!(college.president_id.is_none());

  let president = s
    .create_president(
      new_user("president@example.com", Role::President),
      Some(college.college_id),
    )
    .await
    .unwrap();
  assert_eq!(president.role, Role::President);
  assert_eq!(president.college_id, Some(college.college_id));

  let college = s.get_college(college.college_id).await.unwrap().unwrap();
  assert_eq!(college.president_id, Some(president.user_id));
}

#[tokio::test]
async fn update_president_keeps_password_when_absent() {
  let s = store().await;
  let president = s
    .create_president(new_user("president@example.com", Role::President), None)
    .await
    .unwrap();

  let updated = s
    .update_president(
      president.user_id,
      "New Name".into(),
      "renamed@example.com".into(),
      None,
    )
    .await
    .unwrap();
  assert_eq!(updated.name, "New Name");
  assert_eq!(updated.email, "renamed@example.com");
  assert_eq!(updated.password_hash, president.password_hash);
}

// ─── Colleges ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn college_round_trips_embedded_documents() {
  let s = store().await;
  let mut input = NewCollege::new("Government College", "gc-shimla");
  input.highlights = vec!["NAAC A".into()];
  input.courses = vec![Course {
    name:        "BSc Physics".into(),
    kind:        CourseKind::Undergraduate,
    duration:    "3 years".into(),
    eligibility: "10+2 with science".into(),
    seats:       60,
    fees:        "12,000/yr".into(),
  }];

  let created = s.create_college(input).await.unwrap();
  let fetched = s.get_college(created.college_id).await.unwrap().unwrap();
  assert_eq!(fetched.highlights, vec!["NAAC A".to_string()]);
  assert_eq!(fetched.courses.len(), 1);
  assert_eq!(fetched.courses[0].seats, 60);
  assert_eq!(fetched.courses[0].kind, CourseKind::Undergraduate);
}

#[tokio::test]
async fn duplicate_slug_violates_unique_constraint() {
  let s = store().await;
  s.create_college(NewCollege::new("First", "pu-chd")).await.unwrap();
  let result = s.create_college(NewCollege::new("Second", "pu-chd")).await;
  assert!(result.is_err());
}

#[tokio::test]
async fn find_college_by_slug() {
  let s = store().await;
  let created = s
    .create_college(NewCollege::new("Government College", "gc-shimla"))
    .await
    .unwrap();

  let found = s.find_college_by_slug("gc-shimla").await.unwrap().unwrap();
  assert_eq!(found.college_id, created.college_id);
  assert!(s.find_college_by_slug("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn update_college_merges_partial_fields() {
  let s = store().await;
  let created = s
    .create_college(NewCollege::new("Government College", "gc-shimla"))
    .await
    .unwrap();

  let updated = s
    .update_college(
      created.college_id,
      CollegeUpdate {
        description: Some("The oldest college in the hills.".into()),
        ..Default::default()
      },
    )
    .await
    .unwrap();
  assert_eq!(
    updated.description.as_deref(),
    Some("The oldest college in the hills.")
  );
  assert_eq!(updated.name, "Government College");
  assert_eq!(updated.slug, "gc-shimla");
}

#[tokio::test]
async fn summaries_expose_public_subset_sorted_by_name() {
  let s = store().await;
  s.create_college(NewCollege::new("Zeta College", "zeta")).await.unwrap();
  s.create_college(NewCollege::new("Alpha College", "alpha")).await.unwrap();

  let summaries = s.list_college_summaries().await.unwrap();
  assert_eq!(summaries.len(), 2);
  assert_eq!(summaries[0].name, "Alpha College");
  assert_eq!(summaries[1].name, "Zeta College");
}

// ─── Announcements ───────────────────────────────────────────────────────────

#[tokio::test]
async fn announcements_sort_by_priority_then_recency() {
  let s = store().await;

  let mut low = NewAnnouncement::new("low priority");
  low.priority = 0;
  s.create_announcement(low).await.unwrap();

  let mut high = NewAnnouncement::new("high priority");
  high.priority = 5;
  s.create_announcement(high).await.unwrap();

  let listed = s.list_announcements(true).await.unwrap();
  assert_eq!(listed.len(), 2);
  assert_eq!(listed[0].text, "high priority");
  assert_eq!(listed[1].text, "low priority");
}

#[tokio::test]
async fn delete_announcement_reports_missing_rows() {
  let s = store().await;
  let a = s
    .create_announcement(NewAnnouncement::new("going away"))
    .await
    .unwrap();

  assert!(s.delete_announcement(a.announcement_id).await.unwrap());
  assert!(!s.delete_announcement(a.announcement_id).await.unwrap());
  assert!(s.list_announcements(true).await.unwrap().is_empty());
}

// ─── Role metadata ───────────────────────────────────────────────────────────

#[tokio::test]
async fn static_roles_are_seeded_once() {
  let s = store().await;
  let roles = s.list_roles().await.unwrap();
  assert_eq!(roles.len(), 4);
  assert!(roles.iter().all(|r| r.is_static));

  let names: Vec<&str> = roles.iter().map(|r| r.name.as_str()).collect();
  for expected in ["superadmin", "president", "member", "unverified"] {
    assert!(names.contains(&expected), "missing static role {expected}");
  }
}

#[tokio::test]
async fn custom_roles_can_be_created_and_deleted() {
  let s = store().await;
  let role = s
    .create_role(NewRoleMeta {
      name:        "alumni".into(),
      description: Some("Graduated members".into()),
      color:       "green".into(),
    })
    .await
    .unwrap();
  assert!(!role.is_static);

  let found = s.find_role_by_name("alumni").await.unwrap().unwrap();
  assert_eq!(found.role_id, role.role_id);

  assert!(s.delete_role(role.role_id).await.unwrap());
  assert!(s.find_role_by_name("alumni").await.unwrap().is_none());
}
