use super::*;

mod get_tickets;

fn ticket_params(team_id: i32) -> CreateTicketParams {
    CreateTicketParams {
        title: "VPN down".to_string(),
        description: "Cannot reach the office network".to_string(),
        status: None,
        team_id,
    }
}
