use std::{str::FromStr, time::Duration};

use anyhow::{anyhow, bail, Context, Result};
use carousel::{Carousel, CarouselConfig, Intent, MemorySurface};
use clap::{Parser, Subcommand, ValueEnum};
use contact_api::templates::{confirmation_email, notification_email, MailSettings};
use shared::domain::{ContactFields, ServiceCategory};
use site_core::{ContactClient, ContactForm};
use tokio::time::Instant;
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Parser, Debug)]
#[command(about = "Maintenance helpers for the Krisma Bouw site")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replays a comma-separated script against an in-memory carousel.
    Carousel {
        #[arg(long, value_enum, default_value_t = Which::Project)]
        which: Which,
        #[arg(long, default_value_t = 4)]
        slides: usize,
        #[arg(long)]
        interval_ms: Option<u64>,
        /// e.g. `wait:5000,next,dot:2,hover,wait:9000,leave,swipe:300:120`
        script: String,
    },
    /// Posts an enquiry to a running contact endpoint.
    Submit {
        #[arg(long, env = "CONTACT_ENDPOINT", default_value = "http://127.0.0.1:8080/api/contact")]
        endpoint: Url,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long, default_value = "andere")]
        service: String,
        #[arg(long)]
        message: String,
        #[arg(long, default_value = "local-test-token")]
        captcha_token: String,
    },
    /// Prints the emails a submission would produce.
    PreviewEmail {
        #[arg(long, value_enum, default_value_t = EmailKind::Notification)]
        kind: EmailKind,
        #[arg(long, default_value = "Jan Peeters")]
        name: String,
        #[arg(long, default_value = "jan@example.be")]
        email: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long, default_value = "renovaties")]
        service: String,
        #[arg(long, default_value = "Graag een offerte voor de badkamer.")]
        message: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Which {
    Project,
    About,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EmailKind {
    Notification,
    Confirmation,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Step {
    Wait(Duration),
    Send(Intent),
    Swipe { start: f64, end: f64 },
}

fn parse_script(script: &str) -> Result<Vec<Step>> {
    script
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(parse_step)
        .collect()
}

/// Longest single `wait:` step.
const MAX_WAIT_MS: u64 = 60 * 60 * 1000;

fn parse_step(token: &str) -> Result<Step> {
    let mut parts = token.split(':');
    let head = parts.next().unwrap_or_default();
    let step = match head {
        "next" => Step::Send(Intent::Next),
        "prev" => Step::Send(Intent::Prev),
        "hover" => Step::Send(Intent::PointerEnter),
        "leave" => Step::Send(Intent::PointerLeave),
        "dot" => Step::Send(Intent::Dot(arg(&mut parts, token, "index")?)),
        "wait" => {
            let millis: u64 = arg(&mut parts, token, "duration")?;
            if millis > MAX_WAIT_MS {
                bail!("`{token}` waits longer than {MAX_WAIT_MS} ms");
            }
            Step::Wait(Duration::from_millis(millis))
        }
        "swipe" => {
            let start: f64 = arg(&mut parts, token, "start x")?;
            let end: f64 = arg(&mut parts, token, "end x")?;
            if !start.is_finite() || !end.is_finite() {
                bail!("`{token}` needs finite coordinates");
            }
            Step::Swipe { start, end }
        }
        other => bail!("unknown step `{other}`"),
    };
    if parts.next().is_some() {
        bail!("`{token}` has too many arguments");
    }
    Ok(step)
}

fn arg<'a, T>(parts: &mut impl Iterator<Item = &'a str>, token: &str, what: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    parts
        .next()
        .ok_or_else(|| anyhow!("`{token}` is missing its {what}"))?
        .parse::<T>()
        .with_context(|| format!("`{token}` has an invalid {what}"))
}

fn simulate(config: CarouselConfig, slides: usize, steps: &[Step]) -> Result<Vec<String>> {
    let name = config.name.clone();
    let mut carousel = Carousel::mount(config, Some(MemorySurface::new(slides)))
        .ok_or_else(|| anyhow!("carousel `{name}` could not be mounted"))?;
    let started = Instant::now();
    let mut now = started;
    carousel.start(now);

    let mut log = Vec::new();
    for step in steps {
        match *step {
            Step::Wait(duration) => {
                let end = now + duration;
                while let Some(due) = carousel.next_autoplay_at().filter(|due| *due <= end) {
                    now = due;
                    if carousel.poll_autoplay(now) {
                        log.push(format!(
                            "{:>6}ms autoplay -> slide {}",
                            (now - started).as_millis(),
                            carousel.current_index()
                        ));
                    }
                }
                now = end;
            }
            Step::Swipe { start, end } => {
                carousel.handle(Intent::TouchStart { x: start }, now);
                carousel.handle(Intent::TouchEnd { x: end }, now);
                log.push(format!(
                    "{:>6}ms swipe {start}->{end} -> slide {}",
                    (now - started).as_millis(),
                    carousel.current_index()
                ));
            }
            Step::Send(intent) => {
                carousel.handle(intent, now);
                log.push(format!(
                    "{:>6}ms {intent:?} -> slide {}",
                    (now - started).as_millis(),
                    carousel.current_index()
                ));
            }
        }
    }

    let snapshot = carousel.destroy().snapshot();
    log.push(format!(
        "track offset {}%, active dots {:?}",
        snapshot.track_offset_percent,
        snapshot.active_dots()
    ));
    Ok(log)
}

fn fields(
    name: String,
    email: String,
    phone: Option<String>,
    service: String,
    message: String,
) -> ContactFields {
    ContactFields {
        name,
        email,
        phone: phone.unwrap_or_default(),
        service,
        message,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
    let cli = Cli::parse();

    match cli.command {
        Command::Carousel {
            which,
            slides,
            interval_ms,
            script,
        } => {
            let mut config = match which {
                Which::Project => CarouselConfig::project(),
                Which::About => CarouselConfig::about(),
            };
            if let Some(interval_ms) = interval_ms {
                config = config.with_interval_ms(interval_ms);
            }
            for line in simulate(config, slides, &parse_script(&script)?)? {
                println!("{line}");
            }
        }
        Command::Submit {
            endpoint,
            name,
            email,
            phone,
            service,
            message,
            captcha_token,
        } => {
            if ServiceCategory::from_key(&service).is_none() {
                tracing::warn!(%service, "service is not one of the site's categories");
            }
            let client = ContactClient::new(endpoint);
            let mut form = ContactForm::new();
            form.fields = fields(name, email, phone, service, message);
            let response = form
                .submit(&client, Some(&captcha_token))
                .await
                .context("submission failed")?;
            println!("{}", response.message);
        }
        Command::PreviewEmail {
            kind,
            name,
            email,
            phone,
            service,
            message,
        } => {
            let settings = MailSettings::default();
            let fields = fields(name, email, phone, service, message);
            let mail = match kind {
                EmailKind::Notification => notification_email(&settings, &fields),
                EmailKind::Confirmation => confirmation_email(&settings, &fields),
            };
            println!("To: {}", mail.to.email);
            println!("From: {}", mail.from.email);
            if let Some(reply_to) = &mail.reply_to {
                println!("Reply-To: {}", reply_to.email);
            }
            println!("Subject: {}\n", mail.subject);
            if let Some(text) = &mail.text {
                println!("{text}\n");
            }
            println!("{}", mail.html);
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
