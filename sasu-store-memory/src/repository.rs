use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use sasu_core::models::{
    ActionItem, ActionStatus, Client, DashboardStats, Deal, DealStatus, NewActionItem, NewClient,
    NewDeal, NewProspect, NewQuote, Prospect, ProspectStatus, Quote, QuoteStatus,
};
use sasu_core::store::repository::{CrmRepository, RepositoryError};

/// All CRM collections plus the shared id counter.
#[derive(Default)]
struct State {
    next_id: i64,
    prospects: HashMap<i64, Prospect>,
    clients: HashMap<i64, Client>,
    deals: HashMap<i64, Deal>,
    actions: HashMap<i64, ActionItem>,
    quotes: HashMap<i64, Quote>,
}

impl State {
    /// Ids are sequential and unique across all collections.
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Repository backed by process memory.
pub struct MemoryRepository {
    state: RwLock<State>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State::default()),
        }
    }
}

impl Default for MemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// Collects a map's values sorted by insertion order (ascending id).
fn sorted_by_id<T: Clone>(records: &HashMap<i64, T>, id_of: impl Fn(&T) -> i64) -> Vec<T> {
    let mut list: Vec<T> = records.values().cloned().collect();
    list.sort_by_key(|record| id_of(record));
    list
}

#[async_trait]
impl CrmRepository for MemoryRepository {
    // ── prospects ────────────────────────────────────────────────────────

    async fn create_prospect(&self, prospect: NewProspect) -> Result<Prospect, RepositoryError> {
        let mut state = self.state.write().await;
        let now = Utc::now();
        let record = Prospect {
            id: state.next_id(),
            last_name: prospect.last_name,
            first_name: prospect.first_name,
            email: prospect.email,
            phone: prospect.phone,
            company: prospect.company,
            position: prospect.position,
            status: ProspectStatus::New,
            notes: prospect.notes,
            created_at: now,
            updated_at: now,
        };
        state.prospects.insert(record.id, record.clone());
        Ok(record)
    }

    async fn get_prospect(&self, id: i64) -> Result<Prospect, RepositoryError> {
        self.state
            .read()
            .await
            .prospects
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::not_found("prospect", id))
    }

    async fn list_prospects(&self) -> Result<Vec<Prospect>, RepositoryError> {
        let state = self.state.read().await;
        Ok(sorted_by_id(&state.prospects, |p| p.id))
    }

    async fn update_prospect(
        &self,
        id: i64,
        prospect: NewProspect,
    ) -> Result<Prospect, RepositoryError> {
        let mut state = self.state.write().await;
        let record = state
            .prospects
            .get_mut(&id)
            .ok_or(RepositoryError::not_found("prospect", id))?;
        record.last_name = prospect.last_name;
        record.first_name = prospect.first_name;
        record.email = prospect.email;
        record.phone = prospect.phone;
        record.company = prospect.company;
        record.position = prospect.position;
        record.notes = prospect.notes;
        record.updated_at = Utc::now();
        Ok(record.clone())
    }

    async fn delete_prospect(&self, id: i64) -> Result<(), RepositoryError> {
        self.state
            .write()
            .await
            .prospects
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::not_found("prospect", id))
    }

    async fn convert_prospect(&self, id: i64) -> Result<Client, RepositoryError> {
        let mut state = self.state.write().await;
        let prospect = state
            .prospects
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::not_found("prospect", id))?;

        let now = Utc::now();
        let client = Client {
            id: state.next_id(),
            last_name: prospect.last_name,
            first_name: prospect.first_name,
            email: prospect.email,
            phone: prospect.phone,
            company: prospect.company,
            position: prospect.position,
            address: None,
            siret: None,
            notes: prospect.notes,
            total_revenue: Decimal::ZERO,
            created_at: now,
            updated_at: now,
        };
        state.clients.insert(client.id, client.clone());

        // The prospect is kept and flagged, so the history stays visible.
        if let Some(record) = state.prospects.get_mut(&id) {
            record.status = ProspectStatus::Converted;
            record.updated_at = now;
        }

        Ok(client)
    }

    // ── clients ──────────────────────────────────────────────────────────

    async fn create_client(&self, client: NewClient) -> Result<Client, RepositoryError> {
        let mut state = self.state.write().await;
        let now = Utc::now();
        let record = Client {
            id: state.next_id(),
            last_name: client.last_name,
            first_name: client.first_name,
            email: client.email,
            phone: client.phone,
            company: client.company,
            position: client.position,
            address: client.address,
            siret: client.siret,
            notes: client.notes,
            total_revenue: Decimal::ZERO,
            created_at: now,
            updated_at: now,
        };
        state.clients.insert(record.id, record.clone());
        Ok(record)
    }

    async fn get_client(&self, id: i64) -> Result<Client, RepositoryError> {
        self.state
            .read()
            .await
            .clients
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::not_found("client", id))
    }

    async fn list_clients(&self) -> Result<Vec<Client>, RepositoryError> {
        let state = self.state.read().await;
        Ok(sorted_by_id(&state.clients, |c| c.id))
    }

    async fn update_client(&self, id: i64, client: NewClient) -> Result<Client, RepositoryError> {
        let mut state = self.state.write().await;
        let record = state
            .clients
            .get_mut(&id)
            .ok_or(RepositoryError::not_found("client", id))?;
        record.last_name = client.last_name;
        record.first_name = client.first_name;
        record.email = client.email;
        record.phone = client.phone;
        record.company = client.company;
        record.position = client.position;
        record.address = client.address;
        record.siret = client.siret;
        record.notes = client.notes;
        record.updated_at = Utc::now();
        Ok(record.clone())
    }

    async fn delete_client(&self, id: i64) -> Result<(), RepositoryError> {
        self.state
            .write()
            .await
            .clients
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::not_found("client", id))
    }

    // ── deals ────────────────────────────────────────────────────────────

    async fn create_deal(&self, deal: NewDeal) -> Result<Deal, RepositoryError> {
        let mut state = self.state.write().await;
        if !state.clients.contains_key(&deal.client_id) {
            return Err(RepositoryError::not_found("client", deal.client_id));
        }
        let now = Utc::now();
        let record = Deal {
            id: state.next_id(),
            client_id: deal.client_id,
            title: deal.title,
            description: deal.description,
            expected_amount: deal.expected_amount,
            probability: deal.probability,
            status: DealStatus::Prospect,
            expected_close: deal.expected_close,
            created_at: now,
            updated_at: now,
        };
        state.deals.insert(record.id, record.clone());
        Ok(record)
    }

    async fn get_deal(&self, id: i64) -> Result<Deal, RepositoryError> {
        self.state
            .read()
            .await
            .deals
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::not_found("deal", id))
    }

    async fn list_deals(&self) -> Result<Vec<Deal>, RepositoryError> {
        let state = self.state.read().await;
        Ok(sorted_by_id(&state.deals, |d| d.id))
    }

    async fn update_deal(&self, id: i64, deal: NewDeal) -> Result<Deal, RepositoryError> {
        let mut state = self.state.write().await;
        let record = state
            .deals
            .get_mut(&id)
            .ok_or(RepositoryError::not_found("deal", id))?;
        record.client_id = deal.client_id;
        record.title = deal.title;
        record.description = deal.description;
        record.expected_amount = deal.expected_amount;
        record.probability = deal.probability;
        record.expected_close = deal.expected_close;
        record.updated_at = Utc::now();
        Ok(record.clone())
    }

    async fn set_deal_status(&self, id: i64, status: DealStatus) -> Result<Deal, RepositoryError> {
        let mut state = self.state.write().await;
        let record = state
            .deals
            .get_mut(&id)
            .ok_or(RepositoryError::not_found("deal", id))?;
        record.status = status;
        record.updated_at = Utc::now();
        Ok(record.clone())
    }

    async fn delete_deal(&self, id: i64) -> Result<(), RepositoryError> {
        self.state
            .write()
            .await
            .deals
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::not_found("deal", id))
    }

    // ── actions ──────────────────────────────────────────────────────────

    async fn create_action(&self, action: NewActionItem) -> Result<ActionItem, RepositoryError> {
        let mut state = self.state.write().await;
        if !state.deals.contains_key(&action.deal_id) {
            return Err(RepositoryError::not_found("deal", action.deal_id));
        }
        let now = Utc::now();
        let record = ActionItem {
            id: state.next_id(),
            deal_id: action.deal_id,
            kind: action.kind,
            title: action.title,
            description: action.description,
            due_date: action.due_date,
            status: ActionStatus::Todo,
            created_at: now,
            updated_at: now,
        };
        state.actions.insert(record.id, record.clone());
        Ok(record)
    }

    async fn get_action(&self, id: i64) -> Result<ActionItem, RepositoryError> {
        self.state
            .read()
            .await
            .actions
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::not_found("action", id))
    }

    async fn list_actions(&self) -> Result<Vec<ActionItem>, RepositoryError> {
        let state = self.state.read().await;
        Ok(sorted_by_id(&state.actions, |a| a.id))
    }

    async fn update_action(
        &self,
        id: i64,
        action: NewActionItem,
    ) -> Result<ActionItem, RepositoryError> {
        let mut state = self.state.write().await;
        let record = state
            .actions
            .get_mut(&id)
            .ok_or(RepositoryError::not_found("action", id))?;
        record.deal_id = action.deal_id;
        record.kind = action.kind;
        record.title = action.title;
        record.description = action.description;
        record.due_date = action.due_date;
        record.updated_at = Utc::now();
        Ok(record.clone())
    }

    async fn set_action_status(
        &self,
        id: i64,
        status: ActionStatus,
    ) -> Result<ActionItem, RepositoryError> {
        let mut state = self.state.write().await;
        let record = state
            .actions
            .get_mut(&id)
            .ok_or(RepositoryError::not_found("action", id))?;
        record.status = status;
        record.updated_at = Utc::now();
        Ok(record.clone())
    }

    async fn delete_action(&self, id: i64) -> Result<(), RepositoryError> {
        self.state
            .write()
            .await
            .actions
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::not_found("action", id))
    }

    // ── quotes ───────────────────────────────────────────────────────────

    async fn create_quote(&self, quote: NewQuote) -> Result<Quote, RepositoryError> {
        let mut state = self.state.write().await;
        if !state.clients.contains_key(&quote.client_id) {
            return Err(RepositoryError::not_found("client", quote.client_id));
        }
        // Numbered from the live count, so a deleted quote's reference can
        // be reissued to a later one.
        let number = format!("DEV-{:04}", state.quotes.len() + 1);
        let (net_total, vat_amount, gross_total) = quote.totals();
        let now = Utc::now();
        let record = Quote {
            id: state.next_id(),
            client_id: quote.client_id,
            deal_id: quote.deal_id,
            number,
            title: quote.title,
            lines: quote.lines,
            net_total,
            vat_rate: quote.vat_rate,
            vat_amount,
            gross_total,
            status: QuoteStatus::Draft,
            valid_until: quote.valid_until,
            created_at: now,
            updated_at: now,
        };
        state.quotes.insert(record.id, record.clone());
        Ok(record)
    }

    async fn get_quote(&self, id: i64) -> Result<Quote, RepositoryError> {
        self.state
            .read()
            .await
            .quotes
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::not_found("quote", id))
    }

    async fn list_quotes(&self) -> Result<Vec<Quote>, RepositoryError> {
        let state = self.state.read().await;
        Ok(sorted_by_id(&state.quotes, |q| q.id))
    }

    async fn update_quote(&self, id: i64, quote: NewQuote) -> Result<Quote, RepositoryError> {
        let mut state = self.state.write().await;
        let record = state
            .quotes
            .get_mut(&id)
            .ok_or(RepositoryError::not_found("quote", id))?;
        // The reference number never changes; totals follow the new lines.
        let (net_total, vat_amount, gross_total) = quote.totals();
        record.client_id = quote.client_id;
        record.deal_id = quote.deal_id;
        record.title = quote.title;
        record.lines = quote.lines;
        record.net_total = net_total;
        record.vat_rate = quote.vat_rate;
        record.vat_amount = vat_amount;
        record.gross_total = gross_total;
        record.valid_until = quote.valid_until;
        record.updated_at = Utc::now();
        Ok(record.clone())
    }

    async fn set_quote_status(
        &self,
        id: i64,
        status: QuoteStatus,
    ) -> Result<Quote, RepositoryError> {
        let mut state = self.state.write().await;
        let record = state
            .quotes
            .get_mut(&id)
            .ok_or(RepositoryError::not_found("quote", id))?;
        record.status = status;
        record.updated_at = Utc::now();
        Ok(record.clone())
    }

    async fn delete_quote(&self, id: i64) -> Result<(), RepositoryError> {
        self.state
            .write()
            .await
            .quotes
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::not_found("quote", id))
    }

    // ── dashboard ────────────────────────────────────────────────────────

    async fn dashboard_stats(&self) -> Result<DashboardStats, RepositoryError> {
        let state = self.state.read().await;
        let open_deals = state
            .deals
            .values()
            .filter(|deal| deal.status != DealStatus::Won)
            .count() as u64;
        let won_deals = state
            .deals
            .values()
            .filter(|deal| deal.status == DealStatus::Won)
            .count() as u64;
        let pipeline_value = state
            .deals
            .values()
            .filter(|deal| deal.status != DealStatus::Lost)
            .map(|deal| deal.expected_amount)
            .sum();

        Ok(DashboardStats {
            prospects: state.prospects.len() as u64,
            clients: state.clients.len() as u64,
            open_deals,
            won_deals,
            pipeline_value,
        })
    }
}
