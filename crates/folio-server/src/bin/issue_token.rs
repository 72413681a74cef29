// Sign a provider token for local testing
//
// Reads AUTH_JWT_SECRET, AUTH_LOGIN_URL and AUTH_ADMIN_ROLE like the server,
// so the printed token is accepted by a server started from the same
// environment. Set it as the `access_token` cookie in the browser.
//
// Decision: Use clap derive for argument parsing

use anyhow::{bail, Context, Result};
use chrono::Duration;
use clap::Parser;
use folio_core::CurrentUser;
use folio_server::auth::{AuthConfig, JwtIdentityProvider};

#[derive(Parser, Debug)]
#[command(name = "issue-token")]
#[command(about = "Print a signed access token for a local Folio server")]
#[command(version)]
struct Args {
    /// Email address carried by the token
    email: String,

    /// Grant the admin role (AUTH_ADMIN_ROLE)
    #[arg(long)]
    admin: bool,

    /// Token lifetime in hours
    #[arg(long, default_value_t = 24)]
    hours: i64,
}

impl Args {
    fn user(&self) -> CurrentUser {
        CurrentUser {
            id: self.email.clone(),
            email: self.email.clone(),
            name: self.email.split('@').next().unwrap_or_default().to_string(),
        }
    }

    fn roles(&self, config: &AuthConfig) -> Vec<String> {
        if self.admin {
            vec![config.admin_role.clone()]
        } else {
            Vec::new()
        }
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let config = AuthConfig::from_env().context("Invalid auth configuration")?;
    if !config.is_enabled() {
        bail!("AUTH_MODE=jwt is required to issue tokens");
    }
    let provider = JwtIdentityProvider::from_config(&config)?;

    let token = provider.issue_token(
        &args.user(),
        &args.roles(&config),
        Duration::hours(args.hours),
    )?;
    println!("{token}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_admin() {
        let args = Args::try_parse_from(["issue-token", "admin@localhost", "--admin"]).unwrap();
        assert_eq!(args.email, "admin@localhost");
        assert!(args.admin);
        assert_eq!(args.hours, 24);

        let config = AuthConfig::default();
        assert_eq!(args.roles(&config), vec!["admin".to_string()]);
        assert_eq!(args.user().name, "admin");
    }

    #[test]
    fn test_parse_reader() {
        let args =
            Args::try_parse_from(["issue-token", "user@localhost", "--hours", "2"]).unwrap();
        assert!(!args.admin);
        assert_eq!(args.hours, 2);
        assert!(args.roles(&AuthConfig::default()).is_empty());
    }

    #[test]
    fn test_email_required() {
        assert!(Args::try_parse_from(["issue-token", "--admin"]).is_err());
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Args::try_parse_from(["issue-token", "a@b", "--admin", "--bogus"]).is_err());
    }
}
