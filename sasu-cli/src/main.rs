//! Command-line front end for the SASU compensation optimizer and its
//! CRM store.

use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sasu_core::calculations::{gross_for_net_salary, optimize_compensation};
use sasu_core::models::{
    ActionItem, ActionKind, Client, DashboardStats, Deal, DealStatus, FamilyStatus,
    FiscalSchedule, HouseholdProfile, NewActionItem, NewDeal, NewProspect, NewQuote, Prospect,
    Quote, QuoteLine, QuoteStatus, TaxBracket,
};
use sasu_core::store::factory::{RepositoryRegistry, StoreConfig};
use sasu_core::store::repository::CrmRepository;
use sasu_core::{FiscalScenario, NetToGrossResult, OptimalSplitInput, OptimizationResult};
use sasu_store_memory::MemoryRepositoryFactory;

#[derive(Parser)]
#[command(
    name = "sasu",
    version,
    about = "Optimise la rémunération salaire/dividendes d'un dirigeant de SASU"
)]
struct Cli {
    /// Emit machine-readable JSON instead of formatted text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find the salary/dividend split that maximizes net disposable income.
    Optimize {
        /// Annual revenue excluding VAT, in euros.
        #[arg(long)]
        revenue: Decimal,

        /// Deductible operating charges, excluding the dirigeant's pay.
        #[arg(long, default_value = "0")]
        charges: Decimal,

        /// Minimum acceptable annual net salary.
        #[arg(long)]
        net_salary_floor: Option<Decimal>,

        #[command(flatten)]
        household: HouseholdArgs,
    },

    /// Gross salary required to reach a target net salary after income tax.
    NetToGross {
        /// Desired annual net salary after income tax, in euros.
        #[arg(long)]
        net: Decimal,

        #[command(flatten)]
        household: HouseholdArgs,
    },

    /// Print the fiscal schedule currently in effect.
    Schedule,

    /// Walk a sample prospect-to-quote workflow against the in-memory
    /// CRM store and print the resulting records and dashboard.
    CrmDemo {
        /// Status reached by the demo deal: prospect, negociation,
        /// proposition, gagne or perdu.
        #[arg(long, default_value = "gagne")]
        deal_status: String,

        /// Kind of the follow-up action: appel, email, rendez_vous,
        /// relance or autre.
        #[arg(long, default_value = "rendez_vous")]
        action_kind: String,

        /// Expected amount of the demo deal, in euros.
        #[arg(long, default_value = "15000")]
        amount: Decimal,
    },
}

#[derive(Args)]
struct HouseholdArgs {
    /// Marital status: celibataire, marie or pacse.
    #[arg(long, default_value = "celibataire")]
    family_status: String,

    /// Family-quotient parts of the household.
    #[arg(long, default_value = "1")]
    parts: Decimal,

    /// Other annual taxable income of the household.
    #[arg(long, default_value = "0")]
    other_income: Decimal,
}

impl HouseholdArgs {
    fn to_profile(&self) -> Result<HouseholdProfile> {
        let status = FamilyStatus::parse(&self.family_status).ok_or_else(|| {
            anyhow!(
                "unknown family status '{}'; expected celibataire, marie or pacse",
                self.family_status
            )
        })?;
        if self.parts <= Decimal::ZERO {
            return Err(anyhow!("family-quotient parts must be positive"));
        }
        if self.other_income < Decimal::ZERO {
            return Err(anyhow!("other income cannot be negative"));
        }
        Ok(HouseholdProfile::new(status, self.parts, self.other_income))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so --json output stays pipeable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Optimize {
            revenue,
            charges,
            net_salary_floor,
            household,
        } => {
            let input = OptimalSplitInput {
                revenue,
                deductible_charges: charges,
                household: household.to_profile()?,
                net_salary_floor,
            };
            let result = optimize_compensation(&input).context("optimization failed")?;
            if cli.json {
                print_json(&result)?;
            } else {
                print_optimization(&result);
            }
        }
        Command::NetToGross { net, household } => {
            let result = gross_for_net_salary(net, &household.to_profile()?)
                .context("net-to-gross conversion failed")?;
            if cli.json {
                print_json(&result)?;
            } else {
                print_net_to_gross(&result);
            }
        }
        Command::Schedule => {
            let schedule = FiscalSchedule::current();
            if cli.json {
                print_json(&schedule)?;
            } else {
                print_schedule(&schedule);
            }
        }
        Command::CrmDemo {
            deal_status,
            action_kind,
            amount,
        } => {
            let deal_status = DealStatus::parse(&deal_status)
                .ok_or_else(|| anyhow!("unknown deal status '{deal_status}'"))?;
            let action_kind = ActionKind::parse(&action_kind)
                .ok_or_else(|| anyhow!("unknown action kind '{action_kind}'"))?;

            let mut registry = RepositoryRegistry::new();
            registry.register(Box::new(MemoryRepositoryFactory));
            info!(
                backends = ?registry.available_backends(),
                "opening CRM store"
            );
            let repo = registry
                .create(&StoreConfig::default())
                .await
                .context("failed to open the CRM store")?;

            let report = run_crm_demo(repo.as_ref(), deal_status, action_kind, amount).await?;
            if cli.json {
                print_json(&report)?;
            } else {
                print_crm_demo(&report);
            }
        }
    }

    Ok(())
}

/// Everything the demo workflow produced, in creation order.
#[derive(Serialize)]
struct CrmDemoReport {
    prospects: Vec<Prospect>,
    client: Client,
    deal: Deal,
    action: ActionItem,
    quote: Quote,
    stats: DashboardStats,
}

/// Representative workflow: two prospects, one converted to a client, a
/// deal with a follow-up action, a quote sent against it, then the
/// dashboard aggregates.
async fn run_crm_demo(
    repo: &dyn CrmRepository,
    deal_status: DealStatus,
    action_kind: ActionKind,
    amount: Decimal,
) -> Result<CrmDemoReport> {
    let converted = repo
        .create_prospect(NewProspect {
            last_name: "Durand".to_string(),
            first_name: "Claire".to_string(),
            email: "claire.durand@example.fr".to_string(),
            phone: "0612345678".to_string(),
            company: "Atelier Blanc".to_string(),
            position: Some("Gérante".to_string()),
            notes: None,
        })
        .await?;
    repo.create_prospect(NewProspect {
        last_name: "Lefevre".to_string(),
        first_name: "Marc".to_string(),
        email: "marc.lefevre@example.fr".to_string(),
        phone: "0698765432".to_string(),
        company: "Forge Numérique".to_string(),
        position: None,
        notes: Some("Recommandé par un client".to_string()),
    })
    .await?;

    let client = repo.convert_prospect(converted.id).await?;

    let deal = repo
        .create_deal(NewDeal {
            client_id: client.id,
            title: "Accompagnement annuel".to_string(),
            description: None,
            expected_amount: amount,
            probability: 60,
            expected_close: None,
        })
        .await?;
    let action = repo
        .create_action(NewActionItem {
            deal_id: deal.id,
            kind: action_kind,
            title: "Point de cadrage".to_string(),
            description: None,
            due_date: Utc::now(),
        })
        .await?;
    let deal = repo.set_deal_status(deal.id, deal_status).await?;

    let quote = repo
        .create_quote(NewQuote {
            client_id: client.id,
            deal_id: Some(deal.id),
            title: deal.title.clone(),
            lines: vec![QuoteLine {
                description: "Accompagnement fiscal et social".to_string(),
                quantity: dec!(1),
                unit_price: amount,
                amount,
            }],
            vat_rate: dec!(20),
            valid_until: None,
        })
        .await?;
    let quote = repo.set_quote_status(quote.id, QuoteStatus::Sent).await?;

    let prospects = repo.list_prospects().await?;
    let stats = repo.dashboard_stats().await?;

    Ok(CrmDemoReport {
        prospects,
        client,
        deal,
        action,
        quote,
        stats,
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_optimization(result: &OptimizationResult) {
    println!(
        "CA {} € | charges {} € | résultat à répartir {} €",
        result.revenue, result.deductible_charges, result.pre_tax_result
    );
    println!();
    println!("Répartition optimale");
    print_scenario(&result.optimal);

    println!();
    println!("Références");
    println!(
        "  Tout salaire    : net disponible {:>12} €",
        result.full_salary.net_disposable
    );
    println!(
        "  Tout dividendes : net disponible {:>12} €",
        result.full_dividends.net_disposable
    );

    if !result.recommendations.is_empty() {
        println!();
        println!("Conseils");
        for advice in &result.recommendations {
            println!("  - {advice}");
        }
    }
}

fn print_scenario(scenario: &FiscalScenario) {
    println!("  Salaire brut          : {:>12} €", scenario.gross_salary);
    println!(
        "  Cotisations sociales  : {:>12} €",
        scenario.social_contributions
    );
    println!("  Salaire net           : {:>12} €", scenario.net_salary);
    println!("  Impôt sur les sociétés: {:>12} €", scenario.corporate_tax);
    println!(
        "  Dividendes bruts      : {:>12} €",
        scenario.gross_dividends
    );
    println!(
        "  Flat tax dividendes   : {:>12} €",
        scenario.dividend_income_tax + scenario.dividend_social_levies
    );
    println!(
        "  Impôt sur le revenu   : {:>12} €",
        scenario.income_tax_on_salary
    );
    println!("  Net disponible        : {:>12} €", scenario.net_disposable);
    println!(
        "  Taux de prélèvement   : {:>12} %",
        scenario.overall_levy_rate
    );
}

fn print_net_to_gross(result: &NetToGrossResult) {
    println!("  Salaire brut requis   : {:>12} €", result.gross_salary);
    println!(
        "  Cotisations sociales  : {:>12} €",
        result.social_contributions
    );
    println!("  Impôt sur le revenu   : {:>12} €", result.income_tax);
    println!("  Salaire net obtenu    : {:>12} €", result.net_salary);
    println!("  Coût employeur        : {:>12} €", result.employer_cost);
    println!(
        "  Taux de cotisations   : {:>12} %",
        result.social_charge_rate
    );
    println!(
        "  Taux de prélèvement   : {:>12} %",
        result.total_withholding_rate
    );
    if !result.converged {
        println!(
            "  Attention : estimation non convergée après {} itérations",
            result.iterations
        );
    }
}

fn print_schedule(schedule: &FiscalSchedule) {
    println!("Barème fiscal {}", schedule.year);
    println!();
    println!("Impôt sur les sociétés");
    print_brackets(&schedule.corporate_brackets);
    println!();
    println!("Impôt sur le revenu (par part)");
    print_brackets(&schedule.income_tax_brackets);
    println!();
    println!(
        "Cotisations dirigeant   : {} %",
        schedule.dirigeant_contribution_rate * Decimal::ONE_HUNDRED
    );
    println!(
        "Cotisations employeur   : {} %",
        schedule.employer_contribution_rate * Decimal::ONE_HUNDRED
    );
    println!(
        "Flat tax dividendes     : {} % + {} %",
        schedule.dividend_income_tax_rate * Decimal::ONE_HUNDRED,
        schedule.dividend_social_levy_rate * Decimal::ONE_HUNDRED
    );
    println!(
        "Abattement salaire      : {} % plafonné à {} €",
        schedule.salary_allowance_rate * Decimal::ONE_HUNDRED,
        schedule.salary_allowance_cap
    );
}

fn print_brackets(brackets: &[TaxBracket]) {
    for bracket in brackets {
        let rate = bracket.rate * Decimal::ONE_HUNDRED;
        match bracket.upper {
            Some(upper) => println!("  {:>8} € à {:>8} € : {} %", bracket.lower, upper, rate),
            None => println!("  au-delà de {:>8} € : {} %", bracket.lower, rate),
        }
    }
}

fn print_crm_demo(report: &CrmDemoReport) {
    println!("Prospects");
    for prospect in &report.prospects {
        println!(
            "  #{} {} {} ({}) [{}]",
            prospect.id,
            prospect.first_name,
            prospect.last_name,
            prospect.company,
            prospect.status.as_str()
        );
    }
    println!();
    println!(
        "Client  #{} {} <{}>",
        report.client.id, report.client.company, report.client.email
    );
    println!(
        "Affaire #{} {} : {} € [{}]",
        report.deal.id,
        report.deal.title,
        report.deal.expected_amount,
        report.deal.status.as_str()
    );
    println!(
        "Action  #{} {} [{} / {}]",
        report.action.id,
        report.action.title,
        report.action.kind.as_str(),
        report.action.status.as_str()
    );
    println!(
        "Devis   {} : {} € HT, {} € TTC [{}]",
        report.quote.number,
        report.quote.net_total,
        report.quote.gross_total,
        report.quote.status.as_str()
    );
    println!();
    println!(
        "Tableau de bord : {} prospects, {} clients, {} affaires ouvertes, {} gagnées, \
         pipeline {} €",
        report.stats.prospects,
        report.stats.clients,
        report.stats.open_deals,
        report.stats.won_deals,
        report.stats.pipeline_value
    );
}
