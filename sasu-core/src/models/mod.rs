mod action_item;
mod client;
mod deal;
mod fiscal_schedule;
mod household;
mod prospect;
mod quote;
mod stats;
mod tax_bracket;

pub use action_item::{ActionItem, ActionKind, ActionStatus, NewActionItem};
pub use client::{Client, NewClient};
pub use deal::{Deal, DealStatus, NewDeal};
pub use fiscal_schedule::FiscalSchedule;
pub use household::{FamilyStatus, HouseholdProfile};
pub use prospect::{NewProspect, Prospect, ProspectStatus};
pub use quote::{NewQuote, Quote, QuoteLine, QuoteStatus};
pub use stats::DashboardStats;
pub use tax_bracket::TaxBracket;
