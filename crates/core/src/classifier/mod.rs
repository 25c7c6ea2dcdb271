//! Deterministic keyword classification of tickets.
//!
//! Both functions are pure and total: identical input always produces the
//! same output, and every input produces some output.

use crate::ticket::{Category, Priority};

/// Ordered category rules; the first rule with any matching keyword wins.
///
/// The order is part of the contract, not an implementation detail: keyword
/// sets overlap (for example "error" appears in both the first and the last
/// rule), so reordering changes results.
const CATEGORY_RULES: &[(Category, &[&str])] = &[
    (
        Category::SoftwareIssue,
        &["application", "error", "exception"],
    ),
    (
        Category::NetworkIssue,
        &["vpn", "network", "connection timeout"],
    ),
    (
        Category::Hardware,
        &["printer", "keyboard", "mouse", "monitor", "hardware"],
    ),
    (
        Category::Software,
        &["software", "install", "update", "failure"],
    ),
    (
        Category::AccessManagement,
        &["access", "admin", "privileges", "permission"],
    ),
    (
        Category::Security,
        &["password", "locked", "login", "authentication"],
    ),
    (
        Category::SystemPerformance,
        &["slow", "performance", "cpu", "overheating"],
    ),
    (Category::Email, &["email", "outlook", "missing email"]),
    (Category::Printing, &["print", "printing"]),
    (Category::Monitoring, &["monitoring", "bsod", "error"]),
];

/// Ordered priority rules used only when the category is unknown;
/// first match wins, like the category rules.
const PRIORITY_FALLBACK_RULES: &[(Priority, &[&str])] = &[
    (
        Priority::Critical,
        &["locked", "unauthorized", "authentication", "security"],
    ),
    (
        Priority::High,
        &["vpn", "network", "access denied", "timeout"],
    ),
    (
        Priority::Medium,
        &["slow", "performance", "update", "failure", "error"],
    ),
    (
        Priority::Low,
        &["printer", "mouse", "keyboard", "request", "support"],
    ),
];

fn normalized(summary: &str, description: &str) -> String {
    format!("{} {}", summary, description).to_lowercase()
}

/// Classify a ticket's category from its text.
pub fn classify_category(summary: &str, description: &str) -> Category {
    let text = normalized(summary, description);
    for (category, keywords) in CATEGORY_RULES {
        if keywords.iter().any(|kw| text.contains(kw)) {
            return *category;
        }
    }
    Category::UserSupport
}

/// Classify a ticket's priority.
///
/// When the category is known the priority is a pure function of it;
/// otherwise an ordered keyword scan over the text decides.
pub fn classify_priority(
    summary: &str,
    description: &str,
    category: Option<Category>,
) -> Priority {
    if let Some(category) = category {
        return category_priority(category);
    }

    let text = normalized(summary, description);
    for (priority, keywords) in PRIORITY_FALLBACK_RULES {
        if keywords.iter().any(|kw| text.contains(kw)) {
            return *priority;
        }
    }
    Priority::Medium
}

/// Fixed priority per category.
fn category_priority(category: Category) -> Priority {
    match category {
        Category::SoftwareIssue | Category::Security => Priority::Critical,
        Category::NetworkIssue | Category::AccessManagement | Category::Monitoring => {
            Priority::High
        }
        Category::SystemPerformance
        | Category::Software
        | Category::Hardware
        | Category::Email => Priority::Medium,
        Category::Printing | Category::UserSupport => Priority::Low,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vpn_classifies_as_network_issue() {
        assert_eq!(classify_category("vpn", ""), Category::NetworkIssue);
        assert_eq!(classify_category("", "vpn"), Category::NetworkIssue);
        assert_eq!(
            classify_category("VPN connection timeout", "VPN disconnects after 5 minutes"),
            Category::NetworkIssue
        );
        // Case and surrounding text are irrelevant.
        assert_eq!(
            classify_category("Cannot reach intranet over VPN today", ""),
            Category::NetworkIssue
        );
    }

    #[test]
    fn test_rule_order_decides_overlapping_keywords() {
        // "application" (rule 1) beats "vpn" (rule 2).
        assert_eq!(
            classify_category("application broken over vpn", ""),
            Category::SoftwareIssue
        );
        // "error" matches both Software Issue and Monitoring; the earlier
        // rule wins.
        assert_eq!(
            classify_category("error on startup", ""),
            Category::SoftwareIssue
        );
    }

    #[test]
    fn test_unmatched_text_defaults_to_user_support() {
        assert_eq!(
            classify_category("new starter onboarding", "desk setup for Monday"),
            Category::UserSupport
        );
    }

    #[test]
    fn test_multiword_keyword_matches() {
        assert_eq!(
            classify_category("intermittent connection timeout", ""),
            Category::NetworkIssue
        );
        assert_eq!(
            classify_category("missing email from inbox", ""),
            Category::Email
        );
    }

    #[test]
    fn test_priority_is_pure_function_of_known_category() {
        // Text would scan as Low in the fallback path; the category wins.
        assert_eq!(
            classify_priority("printer request", "", Some(Category::Security)),
            Priority::Critical
        );
        assert_eq!(
            classify_priority("", "", Some(Category::SoftwareIssue)),
            Priority::Critical
        );
        assert_eq!(
            classify_priority("", "", Some(Category::NetworkIssue)),
            Priority::High
        );
        assert_eq!(
            classify_priority("", "", Some(Category::AccessManagement)),
            Priority::High
        );
        assert_eq!(
            classify_priority("", "", Some(Category::Monitoring)),
            Priority::High
        );
        assert_eq!(
            classify_priority("", "", Some(Category::SystemPerformance)),
            Priority::Medium
        );
        assert_eq!(
            classify_priority("", "", Some(Category::Software)),
            Priority::Medium
        );
        assert_eq!(
            classify_priority("", "", Some(Category::Hardware)),
            Priority::Medium
        );
        assert_eq!(
            classify_priority("", "", Some(Category::Email)),
            Priority::Medium
        );
        assert_eq!(
            classify_priority("", "", Some(Category::Printing)),
            Priority::Low
        );
        assert_eq!(
            classify_priority("", "", Some(Category::UserSupport)),
            Priority::Low
        );
    }

    #[test]
    fn test_priority_fallback_buckets() {
        assert_eq!(
            classify_priority("account locked", "", None),
            Priority::Critical
        );
        assert_eq!(classify_priority("vpn down", "", None), Priority::High);
        assert_eq!(
            classify_priority("update failure", "", None),
            Priority::Medium
        );
        assert_eq!(
            classify_priority("mouse replacement request", "", None),
            Priority::Low
        );
    }

    #[test]
    fn test_priority_fallback_defaults_to_medium() {
        assert_eq!(
            classify_priority("something unusual", "", None),
            Priority::Medium
        );
    }

    #[test]
    fn test_priority_fallback_first_match_wins() {
        // Matches both the Critical bucket ("locked") and the High bucket
        // ("vpn"); the earlier bucket wins.
        assert_eq!(
            classify_priority("locked out of vpn", "", None),
            Priority::Critical
        );
        // Matches High ("timeout") and Medium ("slow").
        assert_eq!(
            classify_priority("slow connection, frequent timeout", "", None),
            Priority::High
        );
    }

    #[test]
    fn test_classification_is_deterministic() {
        let summary = "Software update failure";
        let description = "Update failed with error code 0x800f0831 on several machines.";
        let first = classify_category(summary, description);
        let second = classify_category(summary, description);
        assert_eq!(first, second);
        assert_eq!(
            classify_priority(summary, description, Some(first)),
            classify_priority(summary, description, Some(second))
        );
    }
}
