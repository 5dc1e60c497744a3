use async_trait::async_trait;
use thiserror::Error;

use crate::models::{
    ActionItem, ActionStatus, Client, DashboardStats, Deal, DealStatus, NewActionItem, NewClient,
    NewDeal, NewProspect, NewQuote, Prospect, Quote, QuoteStatus,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("storage error: {0}")]
    Storage(String),

    #[error("configuration error: {0}")]
    Configuration(String),
}

impl RepositoryError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }
}

/// Storage contract for the CRM records.
///
/// Update methods take the same payload as the corresponding create
/// method: the record's id, status and creation timestamp are preserved
/// and only `updated_at` is refreshed. Status transitions go through the
/// dedicated `set_*_status` methods.
///
/// Records referencing another record (deal to client, action to deal,
/// quote to client) are validated at creation time; a dangling reference
/// yields [`RepositoryError::NotFound`] for the referenced entity.
#[async_trait]
pub trait CrmRepository: Send + Sync {
    // Prospects
    async fn create_prospect(&self, prospect: NewProspect) -> Result<Prospect, RepositoryError>;
    async fn get_prospect(&self, id: i64) -> Result<Prospect, RepositoryError>;
    async fn list_prospects(&self) -> Result<Vec<Prospect>, RepositoryError>;
    async fn update_prospect(
        &self,
        id: i64,
        prospect: NewProspect,
    ) -> Result<Prospect, RepositoryError>;
    async fn delete_prospect(&self, id: i64) -> Result<(), RepositoryError>;

    /// Creates a client from the prospect's contact details and marks the
    /// prospect as converted. The prospect itself is kept.
    async fn convert_prospect(&self, id: i64) -> Result<Client, RepositoryError>;

    // Clients
    async fn create_client(&self, client: NewClient) -> Result<Client, RepositoryError>;
    async fn get_client(&self, id: i64) -> Result<Client, RepositoryError>;
    async fn list_clients(&self) -> Result<Vec<Client>, RepositoryError>;
    async fn update_client(&self, id: i64, client: NewClient) -> Result<Client, RepositoryError>;
    async fn delete_client(&self, id: i64) -> Result<(), RepositoryError>;

    // Deals
    async fn create_deal(&self, deal: NewDeal) -> Result<Deal, RepositoryError>;
    async fn get_deal(&self, id: i64) -> Result<Deal, RepositoryError>;
    async fn list_deals(&self) -> Result<Vec<Deal>, RepositoryError>;
    async fn update_deal(&self, id: i64, deal: NewDeal) -> Result<Deal, RepositoryError>;
    async fn set_deal_status(&self, id: i64, status: DealStatus) -> Result<Deal, RepositoryError>;
    async fn delete_deal(&self, id: i64) -> Result<(), RepositoryError>;

    // Actions
    async fn create_action(&self, action: NewActionItem) -> Result<ActionItem, RepositoryError>;
    async fn get_action(&self, id: i64) -> Result<ActionItem, RepositoryError>;
    async fn list_actions(&self) -> Result<Vec<ActionItem>, RepositoryError>;
    async fn update_action(
        &self,
        id: i64,
        action: NewActionItem,
    ) -> Result<ActionItem, RepositoryError>;
    async fn set_action_status(
        &self,
        id: i64,
        status: ActionStatus,
    ) -> Result<ActionItem, RepositoryError>;
    async fn delete_action(&self, id: i64) -> Result<(), RepositoryError>;

    // Quotes
    async fn create_quote(&self, quote: NewQuote) -> Result<Quote, RepositoryError>;
    async fn get_quote(&self, id: i64) -> Result<Quote, RepositoryError>;
    async fn list_quotes(&self) -> Result<Vec<Quote>, RepositoryError>;
    async fn update_quote(&self, id: i64, quote: NewQuote) -> Result<Quote, RepositoryError>;
    async fn set_quote_status(
        &self,
        id: i64,
        status: QuoteStatus,
    ) -> Result<Quote, RepositoryError>;
    async fn delete_quote(&self, id: i64) -> Result<(), RepositoryError>;

    // Dashboard
    async fn dashboard_stats(&self) -> Result<DashboardStats, RepositoryError>;
}
