use tracing_subscriber::EnvFilter;

use techbook::config::AppConfig;
use techbook::services::confirmation::{self, ConfirmationState};
use techbook::services::dashboard::Dashboard;
use techbook::services::workflow::{Screen, Workflow};
use techbook::state::AppState;

const USAGE: &str = "usage: techbook <technicians | dashboard | confirm <booking-id>>";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(api_url = %config.api_url, client_id = %config.client_id, "starting techbook");

    let state = AppState::from_config(config)?;
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["technicians"] => {
            for tech in state.api.list_technicians().await? {
                println!("{}\t{}", tech.id, tech.name);
            }
        }
        ["dashboard"] => {
            let dashboard = Dashboard::load(state.api.as_ref(), state.config.client_id).await;
            match &dashboard.profile {
                Some(profile) => println!("{} <{}>", profile.name, profile.email),
                None => println!("No client details available"),
            }
            if dashboard.bookings.is_empty() {
                println!("No bookings found.");
            }
            for b in &dashboard.bookings {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    b.booking_id, b.service_type, b.technician_name, b.status, b.booking_date
                );
            }
        }
        ["confirm", booking_id] => {
            let policy = state.confirmation_policy();
            let outcome = confirmation::enter(state.api.as_ref(), &policy, booking_id).await?;
            match &outcome.state {
                ConfirmationState::Found { booking, status } => {
                    println!(
                        "{} booked for {} with {} ({})",
                        booking.customer_name,
                        booking.booking_date,
                        booking.technician_id,
                        status.as_str()
                    );
                }
                _ => println!("Booking not found."),
            }

            let mut workflow = Workflow::default();
            workflow.navigate(Screen::Confirmation {
                booking_id: booking_id.to_string(),
            })?;
            if let Some(transition) = outcome.transition {
                let screen = workflow.follow(transition).await?;
                println!("-> {}", screen.as_str());
            }
        }
        _ => anyhow::bail!(USAGE),
    }

    Ok(())
}
