use std::path::PathBuf;
use std::sync::Arc;

use anyhow::bail;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::info;
use uuid::Uuid;

use foras_advice::AdviceClient;
use foras_db::Database;
use foras_remote::RemoteStore;
use foras_store::{AppStore, LocalStore, StoreAdapter};
use foras_types::api::{Identity, NewMessage, NewOpportunity};
use foras_types::filter::{CategoryFilter, OpportunityFilter};
use foras_types::models::{Language, Message, Opportunity, OpportunityType};

#[derive(Parser)]
#[command(name = "foras")]
#[command(about = "Foras — bilingual opportunities marketplace")]
struct Cli {
    /// UI language (ar or en); overrides FORAS_LANG
    #[arg(long, global = true)]
    lang: Option<Language>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse listings with optional filters
    Explore {
        /// Case-insensitive search over title and organization
        #[arg(long, default_value = "")]
        search: String,
        /// Category: JOB, INTERNSHIP, SCHOLARSHIP, COURSE or VOLUNTEER
        #[arg(long)]
        category: Option<OpportunityType>,
        /// Location substring (case-sensitive)
        #[arg(long, default_value = "")]
        location: String,
    },
    /// Show one listing in full
    Show { opportunity_id: Uuid },
    /// Publish a new opportunity
    Post {
        #[arg(long)]
        title: String,
        #[arg(long)]
        organization: String,
        #[arg(long)]
        location: String,
        #[arg(long, value_name = "TYPE")]
        category: OpportunityType,
        #[arg(long)]
        description: String,
        /// Application deadline (YYYY-MM-DD)
        #[arg(long)]
        deadline: NaiveDate,
        /// Repeatable; defaults to the category plus the location
        #[arg(long = "tag")]
        tags: Vec<String>,
        #[arg(long)]
        salary: Option<String>,
        #[arg(long)]
        contact_email: String,
        #[arg(long)]
        contact_phone: String,
    },
    /// Contact the poster of an opportunity
    Contact {
        opportunity_id: Uuid,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
    },
    /// Show received messages
    Inbox,
    /// Reply to a message in the inbox
    Reply { message_id: Uuid, content: String },
    /// Ask the career advisor
    Advise {
        query: String,
        /// Extra context forwarded to the advisor
        #[arg(long)]
        context: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "foras=debug".into()),
        )
        .init();

    let cli = Cli::parse();

    let language = cli
        .lang
        .or_else(|| std::env::var("FORAS_LANG").ok().and_then(|v| v.parse().ok()))
        .unwrap_or_default();

    // The advisor does not touch the store; skip opening it.
    if let Commands::Advise { query, context } = &cli.command {
        let api_key = std::env::var("GEMINI_API_KEY").unwrap_or_default();
        let mut client = AdviceClient::new(api_key);
        if let Ok(model) = std::env::var("FORAS_MODEL") {
            client = client.with_model(model);
        }
        println!("{}", client.career_advice(query, context.as_deref()).await);
        return Ok(());
    }

    let store = AppStore::with_language(build_adapter()?, language);
    store.refresh().await;

    match cli.command {
        Commands::Explore { search, category, location } => {
            let filter = OpportunityFilter {
                search,
                category: category.map(CategoryFilter::One).unwrap_or(CategoryFilter::All),
                location,
            };

            let opportunities = store.filtered_opportunities(&filter).await;
            if opportunities.is_empty() {
                println!("{}", store.translate("noResults"));
                return Ok(());
            }

            println!("{}: {}", store.translate("filterResults"), opportunities.len());
            for opp in &opportunities {
                print_listing_line(&store, opp);
            }
        }

        Commands::Show { opportunity_id } => {
            match store.opportunity_by_id(opportunity_id).await {
                Some(opp) => print_listing(&store, &opp),
                None => println!("{}", store.translate("noResults")),
            }
        }

        Commands::Post {
            title,
            organization,
            location,
            category,
            description,
            deadline,
            tags,
            salary,
            contact_email,
            contact_phone,
        } => {
            let mut new = NewOpportunity {
                title,
                organization,
                location,
                kind: category,
                description,
                deadline,
                tags,
                salary,
                contact_email,
                contact_phone,
            };
            if new.tags.is_empty() {
                new.tags = new.default_tags();
            }

            let created = store.add_opportunity(new).await?;
            println!("{}", store.translate("formSuccess"));
            println!("{}", created.id);
        }

        Commands::Contact { opportunity_id, name, email, message } => {
            if message.trim().is_empty() {
                bail!("empty message");
            }

            store
                .send_message(NewMessage {
                    opportunity_id,
                    sender_name: name,
                    sender_email: email,
                    content: message,
                })
                .await?;

            println!("{}", store.translate("msgSentTitle"));
            println!("{}", store.translate("msgSentDesc"));
        }

        Commands::Inbox => {
            let messages = store.messages().await;
            if messages.is_empty() {
                println!("{}", store.translate("noMessages"));
                println!("{}", store.translate("noMessagesDesc"));
                return Ok(());
            }

            println!("{}: {}", store.translate("inbox"), messages.len());
            for msg in &messages {
                print_message(&store, msg);
            }
        }

        Commands::Reply { message_id, content } => {
            if content.trim().is_empty() {
                bail!("empty reply");
            }

            store.reply_to_message(message_id, &content).await?;

            let messages = store.messages().await;
            if let Some(msg) = messages.iter().find(|m| m.id == message_id) {
                print_message(&store, msg);
            }
        }

        Commands::Advise { .. } => unreachable!("handled above"),
    }

    Ok(())
}

/// Remote store when FORAS_REMOTE_URL is set, local SQLite otherwise.
fn build_adapter() -> anyhow::Result<Arc<dyn StoreAdapter>> {
    if let Ok(base_url) = std::env::var("FORAS_REMOTE_URL") {
        let api_key = std::env::var("FORAS_REMOTE_KEY").unwrap_or_default();
        let mut remote = RemoteStore::new(base_url, api_key);

        if let (Ok(user_id), Ok(email)) =
            (std::env::var("FORAS_USER_ID"), std::env::var("FORAS_USER_EMAIL"))
        {
            let token = std::env::var("FORAS_ACCESS_TOKEN").unwrap_or_default();
            remote = remote.with_identity(Identity { user_id: user_id.parse()?, email }, token);
        }

        info!("Using remote store");
        return Ok(Arc::new(remote));
    }

    let db_path = std::env::var("FORAS_DB_PATH").unwrap_or_else(|_| "foras.db".into());
    let db = Database::open(&PathBuf::from(&db_path))?;
    Ok(Arc::new(LocalStore::new(Arc::new(db))))
}

fn print_listing_line(store: &AppStore, opp: &Opportunity) {
    println!(
        "{}  {} — {} ({}) [{}]",
        opp.id,
        opp.title,
        opp.organization,
        opp.location,
        store.type_label(opp.kind),
    );
}

fn print_listing(store: &AppStore, opp: &Opportunity) {
    println!("{} — {}", opp.title, opp.organization);
    println!("[{}] {}", store.type_label(opp.kind), opp.location);
    println!();
    println!("{}", opp.description);
    println!();
    println!("{}: {}", store.translate("deadline"), opp.deadline.format("%Y-%m-%d"));
    println!("{}: {}", store.translate("postedAt"), opp.posted_at.format("%Y-%m-%d"));
    if let Some(salary) = &opp.salary {
        println!("{}: {}", store.translate("salary"), salary);
    }
    if !opp.tags.is_empty() {
        println!("{}", opp.tags.join(", "));
    }
    println!();
    println!("{}", store.translate("contactInfo"));
    println!("{}: {}", store.translate("email"), opp.contact_email);
    println!("{}: {}", store.translate("phone"), opp.contact_phone);
}

fn print_message(store: &AppStore, msg: &Message) {
    println!(
        "{} <{}> — {} ({})",
        msg.sender_name,
        msg.sender_email,
        msg.opportunity_title,
        msg.timestamp.format("%Y-%m-%d %H:%M"),
    );
    println!("  {}", msg.content);
    for reply in &msg.replies {
        println!(
            "  > {} ({}): {}",
            store.translate("you"),
            reply.timestamp.format("%Y-%m-%d %H:%M"),
            reply.content,
        );
    }
}
