//! `events`, `register`, and `cancel` commands.

use secrecy::SecretString;

use encontro_client::api::{EventsApi, NewEvent, Participant};
use encontro_client::auth::AuthError;
use encontro_core::EventId;

use super::auth::session;
use super::{CliError, Context};

/// Arguments for `events create`.
pub struct CreateArgs {
    pub title: String,
    pub date: String,
    pub location: String,
    pub price: String,
    pub image_url: String,
    pub description: Option<String>,
    pub attractions: Option<String>,
}

fn api(ctx: &Context) -> EventsApi {
    EventsApi::new(ctx.http.clone(), ctx.config.api_url.clone())
}

/// List all events.
///
/// # Errors
///
/// Returns `CliError::Api` when the backend call fails.
pub async fn list(ctx: &Context) -> Result<(), CliError> {
    let events = api(ctx).list_events().await?;

    if events.is_empty() {
        println!("No events available right now.");
        return Ok(());
    }

    for event in events {
        println!(
            "#{} {} - {} - {} - {} ({} registered)",
            event.id, event.title, event.date, event.location, event.price,
            event.subscribers_count
        );
    }
    Ok(())
}

/// Create a new event (admin accounts only).
///
/// # Errors
///
/// Returns `CliError::Auth` when sign-in fails and `CliError::Api` when the
/// backend refuses the event.
pub async fn create(
    ctx: &Context,
    email: &str,
    password: String,
    args: CreateArgs,
) -> Result<(), CliError> {
    let session = session(ctx);
    let user = session.sign_in(email, SecretString::from(password)).await?;
    if !user.user_type.is_admin() {
        return Err(CliError::Auth(AuthError::Rejected(
            "only admin accounts can create events".to_string(),
        )));
    }
    let token = session.token().await.ok_or_else(signed_out)?;

    let mut event = NewEvent::new(args.title, args.date, args.location, args.price, args.image_url);
    event.description = args.description;
    event.attractions = args.attractions;

    api(ctx).create_event(&event, &token).await?;
    println!("Event created.");
    Ok(())
}

/// Register for an event, with optional guests.
///
/// Each participant argument is `"name"` or `"name:age"`.
///
/// # Errors
///
/// Returns `CliError::InvalidArgument` on an unparsable participant,
/// `CliError::Auth` when sign-in fails, and `CliError::Api` when the backend
/// refuses the registration.
pub async fn register(
    ctx: &Context,
    event: i64,
    email: &str,
    password: String,
    participants: &[String],
) -> Result<(), CliError> {
    let participants = participants
        .iter()
        .map(|spec| parse_participant(spec))
        .collect::<Result<Vec<_>, _>>()?;

    let session = session(ctx);
    let user = session.sign_in(email, SecretString::from(password)).await?;
    let token = session.token().await.ok_or_else(signed_out)?;

    api(ctx)
        .register(EventId::new(event), user.id, &participants, &token)
        .await?;
    println!("Registration confirmed for event #{event}.");
    Ok(())
}

/// Cancel a registration.
///
/// # Errors
///
/// Returns `CliError::Auth` when sign-in fails and `CliError::Api` when the
/// backend refuses the cancellation.
pub async fn cancel(
    ctx: &Context,
    event: i64,
    email: &str,
    password: String,
) -> Result<(), CliError> {
    let session = session(ctx);
    let user = session.sign_in(email, SecretString::from(password)).await?;
    let token = session.token().await.ok_or_else(signed_out)?;

    api(ctx)
        .cancel_registration(EventId::new(event), user.id, &token)
        .await?;
    println!("Registration for event #{event} canceled.");
    Ok(())
}

fn signed_out() -> CliError {
    CliError::Auth(AuthError::Rejected("session expired, sign in again".to_string()))
}

/// Parse `"name"` or `"name:age"` into a participant.
fn parse_participant(spec: &str) -> Result<Participant, CliError> {
    let (name, age) = match spec.rsplit_once(':') {
        Some((name, age)) => {
            let age = age.trim().parse::<u32>().map_err(|_| {
                CliError::InvalidArgument(format!("invalid participant age in {spec:?}"))
            })?;
            (name, Some(age))
        }
        None => (spec, None),
    };

    if name.trim().is_empty() {
        return Err(CliError::InvalidArgument(format!(
            "participant name missing in {spec:?}"
        )));
    }

    Ok(Participant::new(name, age))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_participant_with_age() {
        let p = parse_participant("Ana Souza:31").expect("parse");
        assert_eq!(p.name, "Ana Souza");
        assert_eq!(p.age, Some(31));
    }

    #[test]
    fn test_parse_participant_without_age() {
        let p = parse_participant("João").expect("parse");
        assert_eq!(p.name, "João");
        assert_eq!(p.age, None);
    }

    #[test]
    fn test_parse_participant_rejects_bad_age() {
        assert!(parse_participant("Ana:abc").is_err());
    }

    #[test]
    fn test_parse_participant_rejects_empty_name() {
        assert!(parse_participant("  :20").is_err());
    }
}
