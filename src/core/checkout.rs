//! Checkout wizard state
//!
//! A linear, four-step wizard: plan, workspace, payment, review. The session
//! stores only what the user entered; the selected plan, its price and the
//! invoice total are recomputed from that input on every read.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::gateway::{OrderRequest, PaymentError};
use super::plans::{self, BillingCycle, BillingOption, FALLBACK_PLAN_ID, Plan};
use super::validation::{self, FieldErrors};

/// Minimum number of seats in a workspace
pub const MIN_SEATS: u32 = 1;

/// Largest seat count the checkout accepts
pub const MAX_SEATS: u32 = 5000;

/// Wizard steps, in order
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum CheckoutStep {
    #[default]
    Plan = 0,
    Workspace = 1,
    Payment = 2,
    Review = 3,
}

impl CheckoutStep {
    pub const ALL: [CheckoutStep; 4] = [
        CheckoutStep::Plan,
        CheckoutStep::Workspace,
        CheckoutStep::Payment,
        CheckoutStep::Review,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn title(&self) -> &'static str {
        match self {
            CheckoutStep::Plan => "Choose plan",
            CheckoutStep::Workspace => "Workspace",
            CheckoutStep::Payment => "Payment",
            CheckoutStep::Review => "Review",
        }
    }

    fn next(self) -> Self {
        match self {
            CheckoutStep::Plan => CheckoutStep::Workspace,
            CheckoutStep::Workspace => CheckoutStep::Payment,
            CheckoutStep::Payment | CheckoutStep::Review => CheckoutStep::Review,
        }
    }

    fn previous(self) -> Self {
        match self {
            CheckoutStep::Plan | CheckoutStep::Workspace => CheckoutStep::Plan,
            CheckoutStep::Payment => CheckoutStep::Workspace,
            CheckoutStep::Review => CheckoutStep::Payment,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceDetails {
    pub workspace_name: String,
    pub seat_count: u32,
    pub billing_email: String,
    pub reminder: bool,
}

impl Default for WorkspaceDetails {
    fn default() -> Self {
        Self {
            workspace_name: String::new(),
            seat_count: MIN_SEATS,
            billing_email: String::new(),
            reminder: true,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingDetails {
    pub card_number: String,
    pub expiry: String,
    pub cvc: String,
    pub country: String,
    pub address: String,
    pub save_card: bool,
}

/// Partial update for [`WorkspaceDetails`]; `None` fields are left alone
#[derive(Clone, Debug, Default)]
pub struct WorkspacePatch {
    pub workspace_name: Option<String>,
    pub seat_count: Option<u32>,
    pub billing_email: Option<String>,
    pub reminder: Option<bool>,
}

/// Partial update for [`BillingDetails`]; `None` fields are left alone
#[derive(Clone, Debug, Default)]
pub struct BillingPatch {
    pub card_number: Option<String>,
    pub expiry: Option<String>,
    pub cvc: Option<String>,
    pub country: Option<String>,
    pub address: Option<String>,
    pub save_card: Option<bool>,
}

/// Errors raised by the submit transition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("Orders can only be placed from the review step")]
    NotAtReview,
    #[error("This order is already being processed")]
    AlreadySubmitting,
    #[error(transparent)]
    Payment(#[from] PaymentError),
}

/// Where the session is in its submit lifecycle
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Editing,
    Submitting,
    Failed(CheckoutError),
    Completed { reference: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckoutSession {
    step: CheckoutStep,
    selected_plan_id: String,
    billing_cycle: BillingCycle,
    pub workspace: WorkspaceDetails,
    pub billing: BillingDetails,
    status: SubmitStatus,
}

impl Default for CheckoutSession {
    fn default() -> Self {
        Self {
            step: CheckoutStep::Plan,
            selected_plan_id: FALLBACK_PLAN_ID.to_string(),
            billing_cycle: BillingCycle::Monthly,
            workspace: WorkspaceDetails::default(),
            billing: BillingDetails::default(),
            status: SubmitStatus::Editing,
        }
    }
}

impl CheckoutSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a session from the `plan` and `cycle` query parameters.
    ///
    /// The plan id is matched case-insensitively; the cycle must be exactly
    /// `monthly` or `annual`. Unrecognised values keep the defaults.
    pub fn from_query(plan: Option<&str>, cycle: Option<&str>) -> Self {
        let mut session = Self::default();
        if let Some(plan) = plan.and_then(|p| plans::find_plan_ignore_case(p.trim())) {
            session.selected_plan_id = plan.id.to_string();
        }
        if let Some(cycle) = cycle.and_then(BillingCycle::parse) {
            session.billing_cycle = cycle;
        }
        session
    }

    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    pub fn selected_plan_id(&self) -> &str {
        &self.selected_plan_id
    }

    pub fn billing_cycle(&self) -> BillingCycle {
        self.billing_cycle
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.status, SubmitStatus::Submitting)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.status, SubmitStatus::Completed { .. })
    }

    /// Error banner for the review step, if the last submit failed
    pub fn submit_error(&self) -> Option<&CheckoutError> {
        match &self.status {
            SubmitStatus::Failed(error) => Some(error),
            _ => None,
        }
    }

    pub fn dismiss_error(&mut self) {
        if matches!(self.status, SubmitStatus::Failed(_)) {
            self.status = SubmitStatus::Editing;
        }
    }

    /// Select a plan by exact id; unknown ids are ignored
    pub fn select_plan(&mut self, plan_id: &str) {
        if let Some(plan) = plans::find_plan(plan_id) {
            self.selected_plan_id = plan.id.to_string();
        }
    }

    pub fn select_billing_cycle(&mut self, cycle: BillingCycle) {
        self.billing_cycle = cycle;
    }

    pub fn update_workspace(&mut self, patch: WorkspacePatch) {
        let workspace = &mut self.workspace;
        if let Some(name) = patch.workspace_name {
            workspace.workspace_name = name;
        }
        if let Some(seats) = patch.seat_count {
            workspace.seat_count = seats;
        }
        if let Some(email) = patch.billing_email {
            workspace.billing_email = email;
        }
        if let Some(reminder) = patch.reminder {
            workspace.reminder = reminder;
        }
    }

    pub fn update_billing(&mut self, patch: BillingPatch) {
        let billing = &mut self.billing;
        if let Some(card_number) = patch.card_number {
            billing.card_number = card_number;
        }
        if let Some(expiry) = patch.expiry {
            billing.expiry = expiry;
        }
        if let Some(cvc) = patch.cvc {
            billing.cvc = cvc;
        }
        if let Some(country) = patch.country {
            billing.country = country;
        }
        if let Some(address) = patch.address {
            billing.address = address;
        }
        if let Some(save_card) = patch.save_card {
            billing.save_card = save_card;
        }
    }

    /// Move forward one step; no-op at the review step or while submitting
    pub fn go_next(&mut self) {
        if !self.is_submitting() {
            self.step = self.step.next();
        }
    }

    /// Move back one step; no-op at the first step or while submitting
    pub fn go_back(&mut self) {
        if !self.is_submitting() {
            self.step = self.step.previous();
        }
    }

    /// Validate the fields owned by the current step
    pub fn validate_step(&self, current_year: u32, current_month: u32) -> FieldErrors {
        match self.step {
            CheckoutStep::Plan | CheckoutStep::Review => FieldErrors::new(),
            CheckoutStep::Workspace => validation::validate_workspace(&self.workspace),
            CheckoutStep::Payment => {
                validation::validate_billing(&self.billing, current_year, current_month)
            }
        }
    }

    /// Validate the current step and move forward only when it is clean
    pub fn advance(&mut self, current_year: u32, current_month: u32) -> Result<(), FieldErrors> {
        self.validate_step(current_year, current_month).into_result()?;
        self.go_next();
        Ok(())
    }

    /// Enter the submitting state. Only valid once, from the review step.
    pub fn begin_submit(&mut self) -> Result<OrderRequest, CheckoutError> {
        if self.step != CheckoutStep::Review {
            return Err(CheckoutError::NotAtReview);
        }
        if self.is_submitting() || self.is_completed() {
            return Err(CheckoutError::AlreadySubmitting);
        }
        self.status = SubmitStatus::Submitting;
        Ok(self.order_request())
    }

    /// Record the gateway result. Failures keep every entered field.
    pub fn finish_submit(&mut self, result: Result<String, PaymentError>) {
        if !self.is_submitting() {
            return;
        }
        self.status = match result {
            Ok(reference) => SubmitStatus::Completed { reference },
            Err(error) => SubmitStatus::Failed(error.into()),
        };
    }

    pub fn selected_plan(&self) -> &'static Plan {
        plans::get_plan(&self.selected_plan_id)
    }

    pub fn selected_price(&self) -> Option<&'static BillingOption> {
        self.selected_plan().price_for(self.billing_cycle)
    }

    /// Price per seat times seat count, in whole USD per month
    pub fn monthly_total(&self) -> u64 {
        let price = self.selected_price().map_or(0, |option| option.price);
        u64::from(price) * u64::from(self.workspace.seat_count)
    }

    /// Amount charged today: one month, or twelve for annual billing
    pub fn due_today(&self) -> u64 {
        match self.billing_cycle {
            BillingCycle::Monthly => self.monthly_total(),
            BillingCycle::Annual => self.monthly_total() * 12,
        }
    }

    fn order_request(&self) -> OrderRequest {
        OrderRequest {
            plan_id: self.selected_plan().id.to_string(),
            cycle: self.billing_cycle,
            seats: self.workspace.seat_count,
            workspace_name: self.workspace.workspace_name.trim().to_string(),
            billing_email: self.workspace.billing_email.trim().to_string(),
            monthly_total: self.monthly_total(),
        }
    }
}

/// Parse free-text seat input. Non-numeric input keeps `previous`; numbers
/// are clamped into the accepted range.
pub fn parse_seat_count(input: &str, previous: u32) -> u32 {
    let digits: String = input.trim().chars().filter(|c| *c != ',' && *c != '_').collect();
    match digits.parse::<u64>() {
        Ok(value) => value.clamp(u64::from(MIN_SEATS), u64::from(MAX_SEATS)) as u32,
        Err(_) => previous,
    }
}

/// Mask a card number down to its last four digits for the review step
pub fn masked_card(card_number: &str) -> String {
    let digits: Vec<char> = card_number.chars().filter(char::is_ascii_digit).collect();
    if digits.len() < 4 {
        return String::new();
    }
    let last4: String = digits[digits.len() - 4..].iter().collect();
    format!("•••• {}", last4)
}

/// Format whole dollars with thousands separators, e.g. `$12,800`
pub fn format_usd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_session() -> CheckoutSession {
        let mut session = CheckoutSession::new();
        session.update_workspace(WorkspacePatch {
            workspace_name: Some("Acme".to_string()),
            seat_count: Some(5),
            billing_email: Some("billing@acme.io".to_string()),
            ..Default::default()
        });
        session.update_billing(BillingPatch {
            card_number: Some("4242 4242 4242 4242".to_string()),
            expiry: Some("12/30".to_string()),
            cvc: Some("123".to_string()),
            country: Some("Germany".to_string()),
            address: Some("Unter den Linden 1".to_string()),
            save_card: Some(false),
        });
        session
    }

    fn at_review() -> CheckoutSession {
        let mut session = filled_session();
        for _ in 0..3 {
            session.go_next();
        }
        assert_eq!(session.step(), CheckoutStep::Review);
        session
    }

    #[test]
    fn test_defaults() {
        let session = CheckoutSession::new();
        assert_eq!(session.step(), CheckoutStep::Plan);
        assert_eq!(session.selected_plan_id(), "pro");
        assert_eq!(session.billing_cycle(), BillingCycle::Monthly);
        assert_eq!(session.workspace.seat_count, 1);
        assert!(!session.is_submitting());
    }

    #[test]
    fn test_go_back_clamps_at_first_step() {
        let mut session = CheckoutSession::new();
        session.go_back();
        assert_eq!(session.step(), CheckoutStep::Plan);
    }

    #[test]
    fn test_go_next_clamps_at_review() {
        let mut session = CheckoutSession::new();
        for expected in [
            CheckoutStep::Workspace,
            CheckoutStep::Payment,
            CheckoutStep::Review,
            CheckoutStep::Review,
        ] {
            session.go_next();
            assert_eq!(session.step(), expected);
        }
        session.go_back();
        assert_eq!(session.step(), CheckoutStep::Payment);
    }

    #[test]
    fn test_seed_from_query() {
        let session = CheckoutSession::from_query(Some("enterprise"), Some("annual"));
        assert_eq!(session.selected_plan_id(), "enterprise");
        assert_eq!(session.billing_cycle(), BillingCycle::Annual);

        let session = CheckoutSession::from_query(Some("EnterPrise"), None);
        assert_eq!(session.selected_plan_id(), "enterprise");
        assert_eq!(session.billing_cycle(), BillingCycle::Monthly);
    }

    #[test]
    fn test_unknown_query_values_keep_defaults() {
        let session = CheckoutSession::from_query(Some("doesnotexist"), Some("weekly"));
        assert_eq!(session.selected_plan_id(), "pro");
        assert_eq!(session.billing_cycle(), BillingCycle::Monthly);
    }

    #[test]
    fn test_select_plan_ignores_unknown_ids() {
        let mut session = CheckoutSession::new();
        session.select_plan("starter");
        assert_eq!(session.selected_plan_id(), "starter");
        session.select_plan("platinum");
        assert_eq!(session.selected_plan_id(), "starter");
    }

    #[test]
    fn test_price_derivation() {
        let mut session = CheckoutSession::new();
        session.select_plan("pro");
        session.select_billing_cycle(BillingCycle::Annual);
        session.update_workspace(WorkspacePatch {
            seat_count: Some(5),
            ..Default::default()
        });
        assert_eq!(session.selected_price().map(|o| o.price), Some(64));
        assert_eq!(session.monthly_total(), 320);
        assert_eq!(session.due_today(), 3840);

        session.update_workspace(WorkspacePatch {
            seat_count: Some(10),
            ..Default::default()
        });
        assert_eq!(session.monthly_total(), 640);
        // catalog untouched
        assert_eq!(plans::get_plan("pro").price_for(BillingCycle::Annual).map(|o| o.price), Some(64));
    }

    #[test]
    fn test_update_workspace_is_shallow_merge() {
        let mut session = filled_session();
        session.update_workspace(WorkspacePatch {
            reminder: Some(false),
            ..Default::default()
        });
        assert_eq!(session.workspace.workspace_name, "Acme");
        assert_eq!(session.workspace.seat_count, 5);
        assert!(!session.workspace.reminder);
    }

    #[test]
    fn test_advance_requires_valid_step() {
        let mut session = CheckoutSession::new();
        session.go_next();
        let errors = session.advance(2026, 10).unwrap_err();
        assert!(errors.get("workspace_name").is_some());
        assert_eq!(session.step(), CheckoutStep::Workspace);

        let mut session = filled_session();
        session.go_next();
        session.advance(2026, 10).unwrap();
        assert_eq!(session.step(), CheckoutStep::Payment);
        session.advance(2026, 10).unwrap();
        assert_eq!(session.step(), CheckoutStep::Review);
    }

    #[test]
    fn test_submit_only_from_review() {
        let mut session = filled_session();
        assert_eq!(session.begin_submit(), Err(CheckoutError::NotAtReview));
        assert!(!session.is_submitting());
    }

    #[test]
    fn test_submit_success_completes() {
        let mut session = at_review();
        let order = session.begin_submit().unwrap();
        assert_eq!(order.plan_id, "pro");
        assert_eq!(order.seats, 5);
        assert_eq!(order.monthly_total, 395);
        assert!(session.is_submitting());
        assert_eq!(session.begin_submit(), Err(CheckoutError::AlreadySubmitting));

        // navigation is frozen while the order is in flight
        session.go_back();
        assert_eq!(session.step(), CheckoutStep::Review);

        session.finish_submit(Ok("SBY-1".to_string()));
        assert!(session.is_completed());
    }

    #[test]
    fn test_submit_failure_keeps_form_state() {
        let mut session = at_review();
        let before = session.workspace.clone();
        session.begin_submit().unwrap();
        session.finish_submit(Err(PaymentError::CardDeclined));

        assert_eq!(
            session.submit_error(),
            Some(&CheckoutError::Payment(PaymentError::CardDeclined))
        );
        assert_eq!(session.step(), CheckoutStep::Review);
        assert_eq!(session.workspace, before);
        assert_eq!(session.billing.card_number, "4242 4242 4242 4242");

        session.dismiss_error();
        assert_eq!(session.status(), &SubmitStatus::Editing);
        assert!(session.begin_submit().is_ok());
    }

    #[test]
    fn test_parse_seat_count() {
        assert_eq!(parse_seat_count("12", 3), 12);
        assert_eq!(parse_seat_count(" 1,200 ", 3), 1200);
        assert_eq!(parse_seat_count("abc", 3), 3);
        assert_eq!(parse_seat_count("", 7), 7);
        assert_eq!(parse_seat_count("0", 3), 1);
        assert_eq!(parse_seat_count("999999999999", 3), MAX_SEATS);
        assert_eq!(parse_seat_count("-4", 3), 3);
    }

    #[test]
    fn test_masked_card() {
        assert_eq!(masked_card("4242 4242 4242 4242"), "•••• 4242");
        assert_eq!(masked_card("42"), "");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(0), "$0");
        assert_eq!(format_usd(320), "$320");
        assert_eq!(format_usd(3840), "$3,840");
        assert_eq!(format_usd(1_234_567), "$1,234,567");
    }
}
