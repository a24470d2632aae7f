use crate::api::AdminApi;
use crate::detail::StatTile;
use crate::error::ApiError;
use crate::http::Transport;
use crate::schema::{DuplicateTicket, TicketCheck, TicketStats, UserTickets};

/// Result of the last lookup run on the tickets page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketLookup {
    User(UserTickets),
    Ticket(TicketCheck),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketsView {
    pub stats: TicketStats,
    pub duplicates: Vec<DuplicateTicket>,
    pub lookup: Option<TicketLookup>,
}

impl TicketsView {
    #[must_use]
    pub fn tiles(&self) -> Vec<StatTile> {
        let range = match (self.stats.min, self.stats.max) {
            (Some(min), Some(max)) => format!("{min}–{max}"),
            _ => "—".to_string(),
        };
        let dup = &self.stats.duplicates;
        vec![
            StatTile::new("Issued", self.stats.total),
            StatTile::new("From quizzes", self.stats.from_quiz),
            StatTile::new("From raffles", self.stats.from_raffle),
            StatTile::new("Number range", range),
            StatTile::new("Duplicates", dup.in_quiz + dup.in_raffle + dup.cross_table),
        ]
    }

    #[must_use]
    pub fn duplicate_label(ticket: &DuplicateTicket) -> String {
        let users: Vec<String> = ticket.user_ids.iter().map(ToString::to_string).collect();
        format!(
            "#{} ×{} ({}): {}",
            ticket.ticket_number,
            ticket.count,
            ticket.source.label(),
            users.join(", ")
        )
    }
}

/// # Errors
///
/// Fails with the first error of the concurrent reads.
pub async fn load_tickets<T: Transport>(api: &AdminApi<T>) -> Result<TicketsView, ApiError> {
    let (stats, duplicates) = futures::try_join!(api.ticket_stats(), api.ticket_duplicates())?;
    Ok(TicketsView {
        stats,
        duplicates: duplicates.duplicates,
        lookup: None,
    })
}
