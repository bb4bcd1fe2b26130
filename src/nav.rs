//! Role-gated navigation
//!
//! The visible navigation surface is a pure function of the session's role;
//! there is no navigation state of its own.

use crate::session::Role;

/// A navigation link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    /// Route path
    pub path: &'static str,

    /// Display label
    pub label: &'static str,
}

const HOME: NavLink = NavLink { path: "/", label: "Home" };
const ABOUT: NavLink = NavLink { path: "/about", label: "About" };

/// The navigation links visible to the given role
///
/// Guests and buyers browse the catalog; sellers see their listing
/// workflows; admins see the moderation surface.
pub fn nav_links(role: Role) -> Vec<NavLink> {
    let mut links = vec![HOME, ABOUT];
    match role {
        Role::Guest | Role::User => {
            links.push(NavLink { path: "/books", label: "Books" });
            links.push(NavLink { path: "/clothes", label: "Clothes" });
        }
        Role::Seller => {
            links.push(NavLink { path: "/seller/add-product", label: "Add Product" });
            links.push(NavLink { path: "/seller/items", label: "Seller Items" });
        }
        Role::Admin => {
            links.push(NavLink { path: "/admin/categories", label: "Update Categories" });
            links.push(NavLink { path: "/admin/manage-items", label: "Manage Items" });
            links.push(NavLink { path: "/admin/rates", label: "Rates" });
            links.push(NavLink { path: "/admin/requests", label: "Requests" });
        }
    }
    links
}

/// Whether the cart affordance is visible
pub fn cart_visible(is_logged_in: bool, role: Role) -> bool {
    is_logged_in && role == Role::User
}

/// Whether the account-menu affordance is visible
pub fn account_menu_visible(is_logged_in: bool, role: Role) -> bool {
    is_logged_in && role != Role::Guest
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ROLES: [Role; 4] = [Role::Guest, Role::User, Role::Seller, Role::Admin];

    fn labels(role: Role) -> Vec<&'static str> {
        nav_links(role).iter().map(|l| l.label).collect()
    }

    #[test]
    fn guest_and_buyer_see_the_catalog() {
        for role in [Role::Guest, Role::User] {
            assert_eq!(labels(role), ["Home", "About", "Books", "Clothes"]);
        }
    }

    #[test]
    fn seller_sees_listing_workflows() {
        let labels = labels(Role::Seller);
        assert_eq!(labels, ["Home", "About", "Add Product", "Seller Items"]);
        assert!(!labels.contains(&"Books"));
        assert!(!labels.contains(&"Clothes"));
    }

    #[test]
    fn admin_sees_moderation_surface() {
        assert_eq!(
            labels(Role::Admin),
            ["Home", "About", "Update Categories", "Manage Items", "Rates", "Requests"]
        );
    }

    #[test]
    fn links_are_stable_under_recomputation() {
        for role in ALL_ROLES {
            assert_eq!(nav_links(role), nav_links(role));
        }
    }

    #[test]
    fn cart_is_buyer_only() {
        assert!(cart_visible(true, Role::User));
        assert!(!cart_visible(false, Role::User));
        assert!(!cart_visible(true, Role::Seller));
        assert!(!cart_visible(true, Role::Admin));
        assert!(!cart_visible(false, Role::Guest));
    }

    #[test]
    fn account_menu_requires_a_signed_in_non_guest() {
        assert!(account_menu_visible(true, Role::User));
        assert!(account_menu_visible(true, Role::Seller));
        assert!(account_menu_visible(true, Role::Admin));
        assert!(!account_menu_visible(true, Role::Guest));
        assert!(!account_menu_visible(false, Role::User));
    }
}
