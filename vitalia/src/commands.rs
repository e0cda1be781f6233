use std::io::Write as _;

use anyhow::{bail, Result};
use chrono::NaiveDate;
use tracing::warn;
use uuid::Uuid;

use vitalia_api::endpoints::bookings::BookingStatus;
use vitalia_api::endpoints::programs::ProgramCategory;
use vitalia_api::endpoints::users::Role;
use vitalia_api::{Client, Request};
use vitalia_auth::TokenStore;

use crate::catalog::{Catalog, ProgramFilter};

pub fn parse_category(arg: &str) -> Result<ProgramCategory> {
    match arg.to_lowercase().as_str() {
        "longevity" => Ok(ProgramCategory::Longevity),
        "detox" => Ok(ProgramCategory::Detox),
        "medical-spa" | "medical" => Ok(ProgramCategory::MedicalSpa),
        "fitness" => Ok(ProgramCategory::Fitness),
        "mental-wellness" | "mental" => Ok(ProgramCategory::MentalWellness),
        "nutrition" => Ok(ProgramCategory::Nutrition),
        "recovery" => Ok(ProgramCategory::Recovery),
        other => bail!(
            "unknown category '{}'; try longevity, detox, medical-spa, fitness, \
             mental-wellness, nutrition or recovery",
            other
        ),
    }
}

fn role_label(role: Role) -> &'static str {
    match role {
        Role::User => "guest account",
        Role::Facility => "facility account",
        Role::Admin => "administrator",
    }
}

fn status_label(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Pending => "pending",
        BookingStatus::Confirmed => "confirmed",
        BookingStatus::Cancelled => "cancelled",
        BookingStatus::Completed => "completed",
    }
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label);
    std::io::stdout().flush()?;
    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

pub async fn programs(catalog: &Catalog, filter: ProgramFilter) -> Result<()> {
    if !catalog.is_remote() {
        println!("(no backend configured - showing the sample catalog)\n");
    }

    let cards = catalog.programs(&filter).await?;
    if cards.is_empty() {
        println!("No programs match.");
        return Ok(());
    }

    for card in cards {
        println!("{}  [{}]", card.title, card.slug);
        println!(
            "  {} · {} · {} days · {}",
            card.category, card.destination, card.duration_days, card.price
        );
        if !card.summary.is_empty() {
            println!("  {}", card.summary);
        }
        if let Some(rating) = card.rating {
            println!("  rated {:.1}", rating);
        }
        println!();
    }
    Ok(())
}

pub async fn program(catalog: &Catalog, program: &str) -> Result<()> {
    let Some(detail) = catalog.program(program).await? else {
        bail!("program '{}' not found", program);
    };

    let card = &detail.card;
    println!("{}", card.title);
    if !card.summary.is_empty() {
        println!("{}\n", card.summary);
    }
    println!("Category:    {}", card.category);
    println!("Destination: {}", card.destination);
    println!("Facility:    {}", card.facility);
    println!("Duration:    {} days", card.duration_days);
    println!("Price:       {}", card.price);
    if let Some(rating) = card.rating {
        println!("Rating:      {:.1}", rating);
    }
    if !detail.description.is_empty() {
        println!("\n{}", detail.description);
    }
    if !detail.gallery.is_empty() {
        println!("\nGallery:");
        for image in &detail.gallery {
            println!("  {}", image);
        }
    }
    Ok(())
}

pub async fn destinations(catalog: &Catalog) -> Result<()> {
    if !catalog.is_remote() {
        println!("(no backend configured - showing the sample catalog)\n");
    }

    for destination in catalog.destinations().await? {
        println!(
            "{}  ({} program{})",
            destination.label,
            destination.program_count,
            if destination.program_count == 1 { "" } else { "s" }
        );
    }
    Ok(())
}

pub async fn login(client: &Client, email: &str, use_otp: bool) -> Result<()> {
    let session = if use_otp {
        client.send(Request::auth().request_otp(email)).await?;
        println!("A one-time code was sent to {}.", email);
        let code = prompt("Code: ")?;
        client.send(Request::auth().verify_otp(email, code)).await?
    } else {
        let password = prompt("Password: ")?;
        client.send(Request::auth().login(email, password)).await?
    };

    client
        .token_store()
        .set_tokens(&session.access_token, session.refresh_token.as_deref());
    println!(
        "Signed in as {} ({}).",
        session.user.name,
        role_label(session.user.role)
    );
    Ok(())
}

pub async fn register(client: &Client, name: &str, email: &str) -> Result<()> {
    let password = prompt("Choose a password: ")?;
    let session = client
        .send(Request::auth().register(name, email, password))
        .await?;

    client
        .token_store()
        .set_tokens(&session.access_token, session.refresh_token.as_deref());
    println!("Welcome, {}! Your account is ready.", session.user.name);
    Ok(())
}

pub async fn logout(client: &Client) -> Result<()> {
    // Best-effort server-side revocation; the local session goes either way
    if let Err(err) = client.send(Request::auth().logout()).await {
        warn!("logout request failed: {}", err);
    }
    client.token_store().clear();
    println!("Signed out.");
    Ok(())
}

pub async fn whoami(client: &Client) -> Result<()> {
    let user = client.send(Request::users().profile()).await?;
    println!("{} <{}> - {}", user.name, user.email, role_label(user.role));
    Ok(())
}

pub async fn dashboard(client: &Client) -> Result<()> {
    let user = client.send(Request::users().profile()).await?;
    println!("{} - {}\n", user.name, role_label(user.role));

    match user.role {
        Role::User => {
            let bookings = client.send(Request::bookings().mine()).await?;
            let upcoming = bookings
                .iter()
                .filter(|b| b.status != BookingStatus::Cancelled)
                .count();
            println!("{} booking(s), {} active.", bookings.len(), upcoming);
        }
        Role::Facility => {
            let programs = client.send(Request::facility().programs()).await?;
            let pending = client
                .send(Request::facility().bookings().status(BookingStatus::Pending))
                .await?;
            println!(
                "{} published program(s), {} booking(s) awaiting confirmation.",
                programs.len(),
                pending.len()
            );
        }
        Role::Admin => {
            let users = client.send(Request::users().list().per_page(1u32)).await?;
            println!("{} registered user(s) on the platform.", users.total);
        }
    }
    Ok(())
}

pub async fn bookings(client: &Client) -> Result<()> {
    let bookings = client.send(Request::bookings().mine()).await?;
    if bookings.is_empty() {
        println!("No bookings yet.");
        return Ok(());
    }

    for booking in bookings {
        println!(
            "{}  {}  {} guest(s)  {}  [{}]",
            booking.start_date,
            booking.program.title,
            booking.guests,
            status_label(booking.status),
            booking.id
        );
    }
    Ok(())
}

pub async fn book(
    client: &Client,
    program: &str,
    start: NaiveDate,
    guests: u32,
    notes: Option<String>,
) -> Result<()> {
    // Resolve slugs to an id before booking
    let program = client.send(Request::programs().get(program)).await?;

    let mut request = Request::bookings().create(program.id, start).guests(guests);
    if let Some(notes) = notes {
        request = request.notes(notes);
    }
    let booking = client.send(request).await?;

    println!(
        "Booked {} starting {} for {} guest(s) - {}.",
        program.title,
        booking.start_date,
        booking.guests,
        status_label(booking.status)
    );
    println!("Reference: {}", booking.id);
    Ok(())
}

pub async fn cancel(client: &Client, id: Uuid) -> Result<()> {
    let booking = client.send(Request::bookings().cancel(id)).await?;
    println!("Booking {} is now {}.", booking.id, status_label(booking.status));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_argument_accepts_aliases() {
        assert_eq!(
            parse_category("Medical-Spa").unwrap(),
            ProgramCategory::MedicalSpa
        );
        assert_eq!(parse_category("mental").unwrap(), ProgramCategory::MentalWellness);
        assert!(parse_category("crystal-healing").is_err());
    }
}
