//! Core ticket and handler data types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Workload weight assumed for tickets whose priority has not been set yet.
pub const UNTRIAGED_WEIGHT: u32 = 2;

/// Lifecycle status of a ticket.
///
/// Status is owned by external actors (agents, requesters); the pipeline
/// only reads it. Terminal tickets are never mutated by the pipeline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    InProgress,
    WaitingForUser,
    Resolved,
    Closed,
}

impl TicketStatus {
    /// Returns true if no further pipeline interaction is allowed.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TicketStatus::Resolved | TicketStatus::Closed)
    }

    /// Active tickets count toward handler workload and digest eligibility.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            TicketStatus::Open | TicketStatus::InProgress | TicketStatus::WaitingForUser
        )
    }

    /// Canonical storage form.
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::InProgress => "in_progress",
            TicketStatus::WaitingForUser => "waiting_for_user",
            TicketStatus::Resolved => "resolved",
            TicketStatus::Closed => "closed",
        }
    }

    /// Parse the canonical storage form.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "open" => Some(TicketStatus::Open),
            "in_progress" => Some(TicketStatus::InProgress),
            "waiting_for_user" => Some(TicketStatus::WaitingForUser),
            "resolved" => Some(TicketStatus::Resolved),
            "closed" => Some(TicketStatus::Closed),
            _ => None,
        }
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TicketStatus::Open => "Open",
            TicketStatus::InProgress => "In Progress",
            TicketStatus::WaitingForUser => "Waiting for User",
            TicketStatus::Resolved => "Resolved",
            TicketStatus::Closed => "Closed",
        };
        write!(f, "{}", label)
    }
}

/// Ticket category assigned by the classifier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    SoftwareIssue,
    NetworkIssue,
    Hardware,
    Software,
    AccessManagement,
    Security,
    SystemPerformance,
    Email,
    Printing,
    Monitoring,
    UserSupport,
}

impl Category {
    /// All categories, for synthetic data generation.
    pub const ALL: &'static [Category] = &[
        Category::SoftwareIssue,
        Category::NetworkIssue,
        Category::Hardware,
        Category::Software,
        Category::AccessManagement,
        Category::Security,
        Category::SystemPerformance,
        Category::Email,
        Category::Printing,
        Category::Monitoring,
        Category::UserSupport,
    ];

    /// Canonical storage form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::SoftwareIssue => "software_issue",
            Category::NetworkIssue => "network_issue",
            Category::Hardware => "hardware",
            Category::Software => "software",
            Category::AccessManagement => "access_management",
            Category::Security => "security",
            Category::SystemPerformance => "system_performance",
            Category::Email => "email",
            Category::Printing => "printing",
            Category::Monitoring => "monitoring",
            Category::UserSupport => "user_support",
        }
    }

    /// Parse the canonical storage form.
    pub fn parse(s: &str) -> Option<Self> {
        Category::ALL.iter().copied().find(|c| c.as_str() == s)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Category::SoftwareIssue => "Software Issue",
            Category::NetworkIssue => "Network Issue",
            Category::Hardware => "Hardware",
            Category::Software => "Software",
            Category::AccessManagement => "Access Management",
            Category::Security => "Security",
            Category::SystemPerformance => "System Performance",
            Category::Email => "Email",
            Category::Printing => "Printing",
            Category::Monitoring => "Monitoring",
            Category::UserSupport => "User Support",
        };
        write!(f, "{}", label)
    }
}

/// Ticket priority assigned by the classifier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    /// All priorities, for synthetic data generation.
    pub const ALL: &'static [Priority] = &[
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];

    /// Workload weight used for assignment balancing and digest ordering.
    pub fn weight(&self) -> u32 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
            Priority::Critical => 4,
        }
    }

    /// Canonical storage form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }

    /// Parse the canonical storage form.
    pub fn parse(s: &str) -> Option<Self> {
        Priority::ALL.iter().copied().find(|p| p.as_str() == s)
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        };
        write!(f, "{}", label)
    }
}

/// A support ticket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ticket {
    /// Unique identifier, stable once assigned by the store (`TKT-0001` style).
    pub id: String,

    /// One-line report.
    pub summary: String,

    /// Free-form details.
    pub description: String,

    /// Current lifecycle status.
    pub status: TicketStatus,

    /// Identifier of the handler working this ticket, once assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,

    /// Classified category, once set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,

    /// Classified priority, once set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    /// When the ticket was created.
    pub created_at: DateTime<Utc>,
}

impl Ticket {
    /// Returns true if category, priority and assignee are all set.
    pub fn is_fully_enriched(&self) -> bool {
        self.category.is_some() && self.priority.is_some() && self.assignee.is_some()
    }

    /// Returns true if the enrichment cycle should pick this ticket up.
    pub fn needs_enrichment(&self) -> bool {
        self.status == TicketStatus::Open && !self.is_fully_enriched()
    }

    /// Workload contribution of this ticket.
    pub fn workload_weight(&self) -> u32 {
        self.priority.map_or(UNTRIAGED_WEIGHT, |p| p.weight())
    }
}

/// A person eligible to receive ticket assignments.
///
/// Read-only input to the pipeline; the roster is managed externally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Handler {
    /// Unique identifier (`USR-0001` style).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact address used by notification sinks.
    pub email: String,
    /// Job role.
    pub role: String,
}
