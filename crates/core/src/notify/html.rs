//! HTML rendering of per-handler digests.

use crate::ticket::{Handler, Ticket};

const STYLE: &str = r#"
<style>
    body {
        font-family: Arial, sans-serif;
        margin: 20px;
    }
    h2 {
        color: #333;
    }
    table {
        border-collapse: collapse;
        width: 100%;
    }
    th {
        background-color: #f2f2f2;
        color: #333;
    }
    td, th {
        border: 1px solid #ddd;
        text-align: left;
        padding: 8px;
    }
    tr:nth-child(even) {
        background-color: #f9f9f9;
    }
</style>
"#;

/// Render a handler's digest as a standalone HTML document.
///
/// Tickets are rendered in the order given (the cycle already sorted them by
/// descending priority weight). An empty slice renders a "no open tickets"
/// body so a re-published digest replaces any stale one.
pub fn render_digest(handler: &Handler, tickets: &[Ticket]) -> String {
    if tickets.is_empty() {
        return format!(
            "<html>\n<head></head>\n<body><p>No open tickets to display.</p></body>\n</html>\n"
        );
    }

    let mut rows = String::new();
    for ticket in tickets {
        let category = ticket
            .category
            .map(|c| c.to_string())
            .unwrap_or_default();
        let priority = ticket
            .priority
            .map(|p| p.to_string())
            .unwrap_or_default();
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape(&ticket.id),
            escape(&ticket.summary),
            ticket.status,
            category,
            priority,
        ));
    }

    format!(
        r#"<html>
<head>{style}</head>
<body>
<h2>Open Ticket Summary</h2>
<p>Hi {name},</p>
<p>Here is a summary of your currently assigned <b>open</b> tickets, sorted by priority:</p>
<table>
<tr><th>Ticket</th><th>Summary</th><th>Status</th><th>Category</th><th>Priority</th></tr>
{rows}</table>

<p>Please address these as soon as possible based on urgency.</p>

<p>
Regards, <br>
IT Support Team
</p>
</body>
</html>
"#,
        style = STYLE,
        name = escape(&handler.name),
        rows = rows,
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::ticket::{Category, Priority, TicketStatus};

    fn handler(name: &str) -> Handler {
        Handler {
            id: "USR-0001".to_string(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            role: "Analyst".to_string(),
        }
    }

    fn ticket(id: &str, summary: &str, priority: Priority) -> Ticket {
        Ticket {
            id: id.to_string(),
            summary: summary.to_string(),
            description: String::new(),
            status: TicketStatus::Open,
            assignee: Some("USR-0001".to_string()),
            category: Some(Category::NetworkIssue),
            priority: Some(priority),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_digest_says_no_open_tickets() {
        let html = render_digest(&handler("Alice"), &[]);
        assert!(html.contains("No open tickets to display."));
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn test_digest_greets_handler_and_lists_tickets() {
        let tickets = vec![
            ticket("TKT-0002", "VPN connection timeout", Priority::High),
            ticket("TKT-0001", "Printer not working", Priority::Low),
        ];
        let html = render_digest(&handler("Alice"), &tickets);

        assert!(html.contains("Hi Alice,"));
        assert!(html.contains("TKT-0001"));
        assert!(html.contains("TKT-0002"));
        // Delivery order is preserved.
        let high_pos = html.find("TKT-0002").unwrap();
        let low_pos = html.find("TKT-0001").unwrap();
        assert!(high_pos < low_pos);
    }

    #[test]
    fn test_digest_escapes_markup_in_ticket_text() {
        let mut t = ticket("TKT-0001", "Monitor shows <blank> screen & noise", Priority::Low);
        t.summary = "Monitor shows <blank> screen & noise".to_string();
        let html = render_digest(&handler("Alice"), &[t]);
        assert!(html.contains("&lt;blank&gt;"));
        assert!(html.contains("&amp;"));
        assert!(!html.contains("<blank>"));
    }
}
