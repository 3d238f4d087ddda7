/*
[INPUT]:  Parsed subcommands and a configured ClipperClient
[OUTPUT]: JSON value of the API result, or the normalized ApiError
[POS]:    Command layer - one subcommand per resource client method
[UPDATE]: When resource client methods are added or renamed
*/

use clap::Subcommand;
use clipper_client::{
    CampaignListParams, CampaignStatus, ClipListParams, ClipStatus, ClipperClient, CreateCampaign,
    CreateDispute, CreateStudio, DisputeListParams, DisputeResolution, DisputeStatus,
    NotificationListParams, PayoutMethod, PayoutRequest, Platform, Result, StudioListParams,
    SubmitClip, TransactionListParams, TransactionType, TransportFailure, UpdateCampaign,
    UpdateProfile, UpdateStudio, UpdateUser,
};
use rust_decimal::Decimal;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Campaign endpoints
    #[command(subcommand)]
    Campaigns(CampaignsCommand),
    /// Clip endpoints
    #[command(subcommand)]
    Clips(ClipsCommand),
    /// User endpoints
    #[command(subcommand)]
    Users(UsersCommand),
    /// Notification endpoints
    #[command(subcommand)]
    Notifications(NotificationsCommand),
    /// Balance endpoints
    #[command(subcommand)]
    Balance(BalanceCommand),
    /// Studio endpoints
    #[command(subcommand)]
    Studios(StudiosCommand),
    /// Dispute endpoints
    #[command(subcommand)]
    Disputes(DisputesCommand),
}

#[derive(Subcommand, Debug)]
pub enum CampaignsCommand {
    List {
        #[arg(long, value_parser = parse_wire::<CampaignStatus>)]
        status: Option<CampaignStatus>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    Get {
        id: String,
    },
    Create {
        /// Campaign as JSON, e.g. '{"title":"..","description":"..","budget":100}'
        #[arg(long, value_parser = parse_json::<CreateCampaign>)]
        json: CreateCampaign,
    },
    Update {
        id: String,
        #[arg(long, value_parser = parse_json::<UpdateCampaign>)]
        json: UpdateCampaign,
    },
    Join {
        id: String,
    },
    Leave {
        id: String,
    },
    Participants {
        id: String,
    },
    SetStatus {
        id: String,
        #[arg(value_parser = parse_wire::<CampaignStatus>)]
        status: CampaignStatus,
    },
}

#[derive(Subcommand, Debug)]
pub enum ClipsCommand {
    List {
        #[arg(long)]
        campaign_id: Option<String>,
        #[arg(long)]
        user_id: Option<String>,
        #[arg(long, value_parser = parse_wire::<ClipStatus>)]
        status: Option<ClipStatus>,
        #[arg(long, value_parser = parse_wire::<Platform>)]
        platform: Option<Platform>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    Get {
        id: String,
    },
    Submit {
        #[arg(long, value_parser = parse_json::<SubmitClip>)]
        json: SubmitClip,
    },
    Stats {
        id: String,
    },
    StatsHistory {
        id: String,
    },
    SetStatus {
        id: String,
        #[arg(value_parser = parse_wire::<ClipStatus>)]
        status: ClipStatus,
        #[arg(long)]
        reason: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum UsersCommand {
    Me,
    UpdateMe {
        #[arg(long, value_parser = parse_json::<UpdateUser>)]
        json: UpdateUser,
    },
    Profile,
    UpdateProfile {
        #[arg(long, value_parser = parse_json::<UpdateProfile>)]
        json: UpdateProfile,
    },
    Get {
        id: String,
    },
    ByUsername {
        username: String,
    },
    Search {
        query: String,
        #[arg(long)]
        limit: Option<u32>,
    },
    ReferralStats,
    GenerateReferralCode,
    ApplyReferral {
        code: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum NotificationsCommand {
    List {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        unread_only: bool,
    },
    UnreadCount,
    /// Mark one notification as read, or all of them when no id is given
    MarkRead {
        id: Option<String>,
    },
    MarkAllRead,
    Remove {
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum BalanceCommand {
    Show,
    Transactions {
        #[arg(long = "type", value_parser = parse_wire::<TransactionType>)]
        kind: Option<TransactionType>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    Payout {
        amount: Decimal,
        #[arg(long, value_parser = parse_wire::<PayoutMethod>)]
        method: PayoutMethod,
        #[arg(long)]
        destination: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum StudiosCommand {
    List {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    Get {
        slug: String,
    },
    Create {
        #[arg(long, value_parser = parse_json::<CreateStudio>)]
        json: CreateStudio,
    },
    Update {
        id: String,
        #[arg(long, value_parser = parse_json::<UpdateStudio>)]
        json: UpdateStudio,
    },
    Remove {
        id: String,
    },
    Members {
        id: String,
    },
    Join {
        id: String,
    },
    Leave {
        id: String,
    },
    Rate {
        id: String,
        rating: u8,
        #[arg(long)]
        comment: Option<String>,
    },
    Invites {
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum DisputesCommand {
    List {
        #[arg(long, value_parser = parse_wire::<DisputeStatus>)]
        status: Option<DisputeStatus>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    Get {
        id: String,
    },
    Create {
        #[arg(long, value_parser = parse_json::<CreateDispute>)]
        json: CreateDispute,
    },
    Mine,
    Resolve {
        id: String,
        #[arg(value_parser = parse_wire::<DisputeResolution>)]
        resolution: DisputeResolution,
        #[arg(long)]
        note: Option<String>,
    },
}

/// Run one command; `Value::Null` means the endpoint returns nothing
pub async fn execute(command: Command, client: &ClipperClient) -> Result<Value> {
    match command {
        Command::Campaigns(cmd) => campaigns(cmd, client).await,
        Command::Clips(cmd) => clips(cmd, client).await,
        Command::Users(cmd) => users(cmd, client).await,
        Command::Notifications(cmd) => notifications(cmd, client).await,
        Command::Balance(cmd) => balance(cmd, client).await,
        Command::Studios(cmd) => studios(cmd, client).await,
        Command::Disputes(cmd) => disputes(cmd, client).await,
    }
}

async fn campaigns(cmd: CampaignsCommand, client: &ClipperClient) -> Result<Value> {
    let api = client.campaigns();
    match cmd {
        CampaignsCommand::List {
            status,
            page,
            limit,
        } => to_json(api.list(&CampaignListParams { status, page, limit }).await?),
        CampaignsCommand::Get { id } => to_json(api.get_by_id(&id).await?),
        CampaignsCommand::Create { json } => to_json(api.create(&json).await?),
        CampaignsCommand::Update { id, json } => to_json(api.update(&id, &json).await?),
        CampaignsCommand::Join { id } => to_json(api.join(&id).await?),
        CampaignsCommand::Leave { id } => to_json(api.leave(&id).await?),
        CampaignsCommand::Participants { id } => to_json(api.get_participants(&id).await?),
        CampaignsCommand::SetStatus { id, status } => {
            to_json(api.update_status(&id, status).await?)
        }
    }
}

async fn clips(cmd: ClipsCommand, client: &ClipperClient) -> Result<Value> {
    let api = client.clips();
    match cmd {
        ClipsCommand::List {
            campaign_id,
            user_id,
            status,
            platform,
            page,
            limit,
        } => {
            let params = ClipListParams {
                campaign_id,
                user_id,
                status,
                platform,
                page,
                limit,
            };
            to_json(api.list(&params).await?)
        }
        ClipsCommand::Get { id } => to_json(api.get_by_id(&id).await?),
        ClipsCommand::Submit { json } => to_json(api.submit(&json).await?),
        ClipsCommand::Stats { id } => to_json(api.get_stats(&id).await?),
        ClipsCommand::StatsHistory { id } => to_json(api.get_stats_history(&id).await?),
        ClipsCommand::SetStatus { id, status, reason } => {
            to_json(api.update_status(&id, status, reason.as_deref()).await?)
        }
    }
}

async fn users(cmd: UsersCommand, client: &ClipperClient) -> Result<Value> {
    let api = client.users();
    match cmd {
        UsersCommand::Me => to_json(api.get_me().await?),
        UsersCommand::UpdateMe { json } => to_json(api.update_me(&json).await?),
        UsersCommand::Profile => to_json(api.get_profile().await?),
        UsersCommand::UpdateProfile { json } => to_json(api.update_profile(&json).await?),
        UsersCommand::Get { id } => to_json(api.get_by_id(&id).await?),
        UsersCommand::ByUsername { username } => to_json(api.get_by_username(&username).await?),
        UsersCommand::Search { query, limit } => to_json(api.search(&query, limit).await?),
        UsersCommand::ReferralStats => to_json(api.get_referral_stats().await?),
        UsersCommand::GenerateReferralCode => to_json(api.generate_referral_code().await?),
        UsersCommand::ApplyReferral { code } => to_json(api.apply_referral(&code).await?),
    }
}

async fn notifications(cmd: NotificationsCommand, client: &ClipperClient) -> Result<Value> {
    let api = client.notifications();
    match cmd {
        NotificationsCommand::List {
            page,
            limit,
            unread_only,
        } => {
            let params = NotificationListParams {
                page,
                limit,
                unread_only: unread_only.then_some(true),
            };
            to_json(api.list(&params).await?)
        }
        NotificationsCommand::UnreadCount => to_json(api.get_unread_count().await?),
        NotificationsCommand::MarkRead { id } => to_json(api.mark_as_read(id.as_deref()).await?),
        NotificationsCommand::MarkAllRead => to_json(api.mark_all_as_read().await?),
        NotificationsCommand::Remove { id } => to_json(api.remove(&id).await?),
    }
}

async fn balance(cmd: BalanceCommand, client: &ClipperClient) -> Result<Value> {
    let api = client.balance();
    match cmd {
        BalanceCommand::Show => to_json(api.get_balance().await?),
        BalanceCommand::Transactions { kind, page, limit } => {
            to_json(api.get_transactions(&TransactionListParams { kind, page, limit }).await?)
        }
        BalanceCommand::Payout {
            amount,
            method,
            destination,
        } => {
            let request = PayoutRequest {
                amount,
                method,
                destination,
            };
            to_json(api.request_payout(&request).await?)
        }
    }
}

async fn studios(cmd: StudiosCommand, client: &ClipperClient) -> Result<Value> {
    let api = client.studios();
    match cmd {
        StudiosCommand::List {
            search,
            page,
            limit,
        } => to_json(api.list(&StudioListParams { search, page, limit }).await?),
        StudiosCommand::Get { slug } => to_json(api.get_by_slug(&slug).await?),
        StudiosCommand::Create { json } => to_json(api.create(&json).await?),
        StudiosCommand::Update { id, json } => to_json(api.update(&id, &json).await?),
        StudiosCommand::Remove { id } => to_json(api.remove(&id).await?),
        StudiosCommand::Members { id } => to_json(api.get_members(&id).await?),
        StudiosCommand::Join { id } => to_json(api.join(&id).await?),
        StudiosCommand::Leave { id } => to_json(api.leave(&id).await?),
        StudiosCommand::Rate {
            id,
            rating,
            comment,
        } => to_json(api.rate(&id, rating, comment.as_deref()).await?),
        StudiosCommand::Invites { id } => to_json(api.get_invites(&id).await?),
    }
}

async fn disputes(cmd: DisputesCommand, client: &ClipperClient) -> Result<Value> {
    let api = client.disputes();
    match cmd {
        DisputesCommand::List {
            status,
            page,
            limit,
        } => to_json(api.list(&DisputeListParams { status, page, limit }).await?),
        DisputesCommand::Get { id } => to_json(api.get_by_id(&id).await?),
        DisputesCommand::Create { json } => to_json(api.create(&json).await?),
        DisputesCommand::Mine => to_json(api.get_mine().await?),
        DisputesCommand::Resolve {
            id,
            resolution,
            note,
        } => to_json(api.resolve(&id, resolution, note.as_deref()).await?),
    }
}

fn to_json<T: Serialize>(value: T) -> Result<Value> {
    serde_json::to_value(value)
        .map_err(|e| TransportFailure::local(format!("Failed to render result: {e}")).into())
}

/// Parse an enum from its wire name (`active`, `under_review`, ...)
///
/// The catch-all `Unknown` variant accepts any string, so only values that
/// serialize back to the same name are taken.
fn parse_wire<T: Serialize + DeserializeOwned>(raw: &str) -> std::result::Result<T, String> {
    let unrecognized = || format!("unrecognized value '{raw}'");
    let value: T =
        serde_json::from_value(Value::String(raw.to_string())).map_err(|_| unrecognized())?;
    match serde_json::to_value(&value) {
        Ok(Value::String(name)) if name == raw && name != "unknown" => Ok(value),
        _ => Err(unrecognized()),
    }
}

/// Parse a request body given as inline JSON
fn parse_json<T: DeserializeOwned>(raw: &str) -> std::result::Result<T, String> {
    serde_json::from_str(raw).map_err(|e| format!("invalid JSON body: {e}"))
}
