//! Access control resolver
//!
//! Every permission decision in the portal goes through [`resolve`]: the
//! admin-area gate, the handlers, and the dashboard section visibility all
//! consult the same ordered rule table. The backend re-validates every call;
//! these checks only keep the portal from offering what it would refuse.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::{BookingStatus, Role};

/// Outcome of an access check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Allow,
    Deny,
}

impl Decision {
    pub fn is_allowed(self) -> bool {
        matches!(self, Decision::Allow)
    }
}

/// User-account management operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserOp {
    List,
    Create,
    Update,
    Delete,
}

impl UserOp {
    pub fn as_str(self) -> &'static str {
        match self {
            UserOp::List => "list",
            UserOp::Create => "create",
            UserOp::Update => "update",
            UserOp::Delete => "delete",
        }
    }
}

impl fmt::Display for UserOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resort catalogue mutations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResortOp {
    Create,
    Update,
    Delete,
}

impl ResortOp {
    pub fn as_str(self) -> &'static str {
        match self {
            ResortOp::Create => "create",
            ResortOp::Update => "update",
            ResortOp::Delete => "delete",
        }
    }
}

impl fmt::Display for ResortOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A route or action a caller asks to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Resort listing, detail and price quotes
    BrowseResorts,
    /// Any route under the admin area
    AdminArea,
    ManageUsers(UserOp),
    ManageResorts(ResortOp),
    /// Move a booking to the given status
    TransitionBooking(BookingStatus),
    /// Listing every booking in the system
    ViewAllBookings,
    PlaceBooking,
    ViewOwnBookings,
    ViewProfile,
    Logout,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::BrowseResorts => f.write_str("browse_resorts"),
            Action::AdminArea => f.write_str("admin_area"),
            Action::ManageUsers(op) => write!(f, "manage_users:{}", op),
            Action::ManageResorts(op) => write!(f, "manage_resorts:{}", op),
            Action::TransitionBooking(status) => write!(f, "transition_booking:{}", status),
            Action::ViewAllBookings => f.write_str("view_all_bookings"),
            Action::PlaceBooking => f.write_str("place_booking"),
            Action::ViewOwnBookings => f.write_str("view_own_bookings"),
            Action::ViewProfile => f.write_str("view_profile"),
            Action::Logout => f.write_str("logout"),
        }
    }
}

/// Admin dashboard sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminSection {
    Overview,
    Resorts,
    Bookings,
    Users,
}

impl AdminSection {
    pub const ALL: [AdminSection; 4] = [
        AdminSection::Overview,
        AdminSection::Resorts,
        AdminSection::Bookings,
        AdminSection::Users,
    ];

    /// The action a section's content requires
    fn action(self) -> Action {
        match self {
            AdminSection::Overview => Action::AdminArea,
            AdminSection::Resorts => Action::ManageResorts(ResortOp::Update),
            AdminSection::Bookings => Action::ViewAllBookings,
            AdminSection::Users => Action::ManageUsers(UserOp::List),
        }
    }
}

/// Who a rule admits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Audience {
    Anyone,
    Authenticated,
    Staff,
    Superadmin,
}

impl Audience {
    fn admits(self, role: Option<Role>) -> bool {
        match (self, role) {
            (Audience::Anyone, _) => true,
            (_, None) => false,
            (Audience::Authenticated, Some(role)) => role.is_recognized(),
            (Audience::Staff, Some(role)) => matches!(role, Role::Admin | Role::Superadmin),
            (Audience::Superadmin, Some(role)) => role == Role::Superadmin,
        }
    }
}

struct Rule {
    name: &'static str,
    applies: fn(&Action) -> bool,
    audience: Audience,
}

fn is_admin_area(action: &Action) -> bool {
    matches!(action, Action::AdminArea)
}

fn is_user_management(action: &Action) -> bool {
    matches!(action, Action::ManageUsers(_))
}

fn is_resort_mutation(action: &Action) -> bool {
    matches!(action, Action::ManageResorts(_))
}

fn is_booking_administration(action: &Action) -> bool {
    matches!(action, Action::TransitionBooking(_) | Action::ViewAllBookings)
}

fn is_member_action(action: &Action) -> bool {
    matches!(
        action,
        Action::PlaceBooking | Action::ViewOwnBookings | Action::ViewProfile | Action::Logout
    )
}

fn is_browsing(action: &Action) -> bool {
    matches!(action, Action::BrowseResorts)
}

/// Ordered rule table; the first rule that applies decides.
const RULES: &[Rule] = &[
    Rule {
        name: "admin-area",
        applies: is_admin_area,
        audience: Audience::Staff,
    },
    Rule {
        name: "user-management",
        applies: is_user_management,
        audience: Audience::Superadmin,
    },
    Rule {
        name: "resort-mutation",
        applies: is_resort_mutation,
        audience: Audience::Staff,
    },
    Rule {
        name: "booking-administration",
        applies: is_booking_administration,
        audience: Audience::Staff,
    },
    Rule {
        name: "member",
        applies: is_member_action,
        audience: Audience::Authenticated,
    },
    Rule {
        name: "browsing",
        applies: is_browsing,
        audience: Audience::Anyone,
    },
];

/// Decide whether `role` (`None` for anonymous callers) may perform `action`.
///
/// Pure and total: an action no rule covers is denied.
pub fn resolve(role: Option<Role>, action: Action) -> Decision {
    match RULES.iter().find(|rule| (rule.applies)(&action)) {
        Some(rule) if rule.audience.admits(role) => Decision::Allow,
        Some(rule) => {
            debug!(rule = rule.name, action = %action, role = ?role, "Access denied");
            Decision::Deny
        }
        None => Decision::Deny,
    }
}

/// Resolve and turn a denial into the matching error.
///
/// The admin area answers "not found" so its existence is not revealed;
/// anonymous callers get `Unauthorized`; everyone else a generic `Forbidden`.
pub fn enforce(role: Option<Role>, action: Action) -> AppResult<()> {
    if resolve(role, action).is_allowed() {
        return Ok(());
    }

    match (action, role) {
        (Action::AdminArea, _) => Err(AppError::NotFound("Page not found".to_string())),
        (_, None) => Err(AppError::Unauthorized),
        _ => Err(AppError::Forbidden("Insufficient permissions".to_string())),
    }
}

/// Admin dashboard sections the role may see, in display order
pub fn visible_sections(role: Option<Role>) -> Vec<AdminSection> {
    if !resolve(role, Action::AdminArea).is_allowed() {
        return Vec::new();
    }

    AdminSection::ALL
        .into_iter()
        .filter(|section| resolve(role, section.action()).is_allowed())
        .collect()
}

/// Whether the user menu should offer the admin dashboard entry
pub fn shows_admin_entry(role: Option<Role>) -> bool {
    resolve(role, Action::AdminArea).is_allowed()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ROLES: [Option<Role>; 5] = [
        None,
        Some(Role::User),
        Some(Role::Admin),
        Some(Role::Superadmin),
        Some(Role::Unrecognized),
    ];

    const USER_OPS: [UserOp; 4] = [UserOp::List, UserOp::Create, UserOp::Update, UserOp::Delete];
    const RESORT_OPS: [ResortOp; 3] = [ResortOp::Create, ResortOp::Update, ResortOp::Delete];

    fn protected_actions() -> Vec<Action> {
        let mut actions = vec![
            Action::AdminArea,
            Action::ViewAllBookings,
            Action::TransitionBooking(BookingStatus::Confirmed),
            Action::TransitionBooking(BookingStatus::Cancelled),
            Action::PlaceBooking,
            Action::ViewOwnBookings,
            Action::ViewProfile,
            Action::Logout,
        ];
        actions.extend(USER_OPS.map(Action::ManageUsers));
        actions.extend(RESORT_OPS.map(Action::ManageResorts));
        actions
    }

    #[test]
    fn test_admin_area_requires_staff() {
        for role in ALL_ROLES {
            let expected = matches!(role, Some(Role::Admin) | Some(Role::Superadmin));
            assert_eq!(
                resolve(role, Action::AdminArea).is_allowed(),
                expected,
                "role {:?}",
                role
            );
        }
    }

    #[test]
    fn test_user_management_is_superadmin_only() {
        for role in ALL_ROLES {
            for op in USER_OPS {
                let expected = role == Some(Role::Superadmin);
                assert_eq!(resolve(role, Action::ManageUsers(op)).is_allowed(), expected);
            }
        }
    }

    #[test]
    fn test_user_delete_admin_vs_superadmin() {
        let delete = Action::ManageUsers(UserOp::Delete);
        assert_eq!(resolve(Some(Role::Admin), delete), Decision::Deny);
        assert_eq!(resolve(Some(Role::Superadmin), delete), Decision::Allow);
    }

    #[test]
    fn test_resort_mutations_and_transitions_require_staff() {
        for role in ALL_ROLES {
            let staff = matches!(role, Some(Role::Admin) | Some(Role::Superadmin));
            for op in RESORT_OPS {
                assert_eq!(resolve(role, Action::ManageResorts(op)).is_allowed(), staff);
            }
            for status in [BookingStatus::Confirmed, BookingStatus::Cancelled] {
                assert_eq!(
                    resolve(role, Action::TransitionBooking(status)).is_allowed(),
                    staff
                );
            }
            assert_eq!(resolve(role, Action::ViewAllBookings).is_allowed(), staff);
        }
    }

    #[test]
    fn test_member_actions_need_recognized_role() {
        for action in [
            Action::PlaceBooking,
            Action::ViewOwnBookings,
            Action::ViewProfile,
            Action::Logout,
        ] {
            assert_eq!(resolve(None, action), Decision::Deny);
            assert_eq!(resolve(Some(Role::Unrecognized), action), Decision::Deny);
            assert_eq!(resolve(Some(Role::User), action), Decision::Allow);
            assert_eq!(resolve(Some(Role::Admin), action), Decision::Allow);
            assert_eq!(resolve(Some(Role::Superadmin), action), Decision::Allow);
        }
    }

    #[test]
    fn test_anonymous_may_only_browse() {
        assert_eq!(resolve(None, Action::BrowseResorts), Decision::Allow);
        for action in protected_actions() {
            assert_eq!(resolve(None, action), Decision::Deny, "{}", action);
        }
    }

    #[test]
    fn test_unrecognized_role_is_denied_everything_protected() {
        for action in protected_actions() {
            assert_eq!(
                resolve(Some(Role::Unrecognized), action),
                Decision::Deny,
                "{}",
                action
            );
        }
        let misspelled: Role = serde_json::from_str(r#""superadmim""#).unwrap();
        assert_eq!(
            resolve(Some(misspelled), Action::ManageUsers(UserOp::Delete)),
            Decision::Deny
        );
    }

    #[test]
    fn test_enforce_error_mapping() {
        assert!(matches!(
            enforce(Some(Role::User), Action::AdminArea),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(enforce(None, Action::AdminArea), Err(AppError::NotFound(_))));
        assert!(matches!(enforce(None, Action::PlaceBooking), Err(AppError::Unauthorized)));
        assert!(matches!(
            enforce(Some(Role::Admin), Action::ManageUsers(UserOp::List)),
            Err(AppError::Forbidden(_))
        ));
        assert!(enforce(Some(Role::Superadmin), Action::ManageUsers(UserOp::List)).is_ok());
    }

    #[test]
    fn test_visible_sections() {
        assert!(visible_sections(None).is_empty());
        assert!(visible_sections(Some(Role::User)).is_empty());
        assert!(visible_sections(Some(Role::Unrecognized)).is_empty());
        assert_eq!(
            visible_sections(Some(Role::Admin)),
            vec![AdminSection::Overview, AdminSection::Resorts, AdminSection::Bookings]
        );
        assert_eq!(visible_sections(Some(Role::Superadmin)), AdminSection::ALL.to_vec());
    }

    #[test]
    fn test_admin_entry_visibility() {
        assert!(!shows_admin_entry(None));
        assert!(!shows_admin_entry(Some(Role::User)));
        assert!(shows_admin_entry(Some(Role::Admin)));
        assert!(shows_admin_entry(Some(Role::Superadmin)));
    }

    #[test]
    fn test_action_names_are_snake_case() {
        assert_eq!(Action::ManageUsers(UserOp::Delete).to_string(), "manage_users:delete");
        assert_eq!(Action::ManageUsers(UserOp::List).to_string(), "manage_users:list");
        assert_eq!(Action::ManageResorts(ResortOp::Create).to_string(), "manage_resorts:create");
        assert_eq!(
            Action::TransitionBooking(BookingStatus::Confirmed).to_string(),
            "transition_booking:confirmed"
        );
        assert_eq!(Action::AdminArea.to_string(), "admin_area");
    }
}
