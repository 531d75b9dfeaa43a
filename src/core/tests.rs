#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::core::auth_flow::RESEND_COOLDOWN_SECS;
    use crate::core::checkout::{BillingPatch, SubmitStatus, WorkspacePatch};
    use crate::core::gateway::{
        AuthGateway, CheckoutGateway, LoginRequest, OrderConfirmation, OrderRequest, SignupRequest,
    };
    use crate::core::{
        AuthError, AuthModalState, AuthView, CheckoutSession, CheckoutStep, OtpChallenge,
        PaymentError, Redirect, SimulatedGateway,
    };

    /// Gateway that fails every call with the configured errors
    struct FailingGateway {
        auth: AuthError,
        payment: PaymentError,
        calls: Cell<u32>,
    }

    impl FailingGateway {
        fn new(auth: AuthError, payment: PaymentError) -> Self {
            Self {
                auth,
                payment,
                calls: Cell::new(0),
            }
        }

        fn fail<T>(&self, error: &AuthError) -> Result<T, AuthError> {
            self.calls.set(self.calls.get() + 1);
            Err(error.clone())
        }
    }

    impl AuthGateway for FailingGateway {
        async fn login(&self, _request: &LoginRequest) -> Result<(), AuthError> {
            self.fail(&self.auth)
        }

        async fn signup(&self, _request: &SignupRequest) -> Result<(), AuthError> {
            self.fail(&AuthError::AccountExists)
        }

        async fn request_password_reset(&self, _email: &str) -> Result<(), AuthError> {
            self.fail(&self.auth)
        }

        async fn verify_otp(&self, _email: &str, _code: &str) -> Result<(), AuthError> {
            self.fail(&self.auth)
        }

        async fn resend_otp(&self, _email: &str) -> Result<(), AuthError> {
            self.fail(&self.auth)
        }
    }

    impl CheckoutGateway for FailingGateway {
        async fn submit_order(&self, _order: &OrderRequest) -> Result<OrderConfirmation, PaymentError> {
            self.calls.set(self.calls.get() + 1);
            Err(self.payment.clone())
        }
    }

    const YEAR: u32 = 2026;
    const MONTH: u32 = 10;

    fn walk_to_review() -> CheckoutSession {
        let mut session = CheckoutSession::from_query(Some("Starter"), Some("annual"));
        session.advance(YEAR, MONTH).expect("plan step has no fields");

        session.update_workspace(WorkspacePatch {
            workspace_name: Some("Northwind".to_string()),
            seat_count: Some(12),
            billing_email: Some("ap@northwind.io".to_string()),
            reminder: Some(false),
        });
        session.advance(YEAR, MONTH).expect("workspace is valid");

        session.update_billing(BillingPatch {
            card_number: Some("4242-4242-4242-4242".to_string()),
            expiry: Some("11/27".to_string()),
            cvc: Some("314".to_string()),
            country: Some("CA".to_string()),
            address: Some("100 Queen St W, Toronto".to_string()),
            save_card: Some(true),
        });
        session.advance(YEAR, MONTH).expect("billing is valid");
        assert_eq!(session.step(), CheckoutStep::Review);
        session
    }

    async fn place_order<G: CheckoutGateway>(session: &mut CheckoutSession, gateway: &G) {
        let order = session.begin_submit().expect("review step accepts a submit");
        assert!(session.is_submitting());
        let result = gateway.submit_order(&order).await.map(|c| c.reference);
        session.finish_submit(result);
    }

    #[tokio::test]
    async fn test_declined_payment_keeps_everything() {
        let gateway = FailingGateway::new(AuthError::InvalidCredentials, PaymentError::CardDeclined);
        let mut session = walk_to_review();
        let before = session.clone();

        place_order(&mut session, &gateway).await;

        assert_eq!(gateway.calls.get(), 1);
        assert_eq!(session.step(), CheckoutStep::Review);
        assert!(!session.is_submitting());
        assert_eq!(
            session.submit_error().map(ToString::to_string),
            Some("Your card was declined".to_string())
        );
        assert_eq!(session.workspace, before.workspace);
        assert_eq!(session.billing, before.billing);
        assert_eq!(session.selected_plan_id(), "starter");
        assert_eq!(session.monthly_total(), before.monthly_total());
    }

    #[tokio::test]
    async fn test_retry_after_decline_completes() {
        let failing = FailingGateway::new(
            AuthError::InvalidCredentials,
            PaymentError::Unavailable("timeout".to_string()),
        );
        let mut session = walk_to_review();
        place_order(&mut session, &failing).await;
        assert!(session.submit_error().is_some());

        session.dismiss_error();
        assert!(session.submit_error().is_none());

        place_order(&mut session, &SimulatedGateway::instant()).await;
        assert_eq!(
            session.status(),
            &SubmitStatus::Completed {
                reference: "SBY-STARTER-00012".to_string()
            }
        );
        assert!(session.begin_submit().is_err());
    }

    #[tokio::test]
    async fn test_failed_login_leaves_modal_open() {
        let gateway = FailingGateway::new(AuthError::InvalidCredentials, PaymentError::CardDeclined);
        let mut modal = AuthModalState::closed();
        modal.open(AuthView::Login);

        let request = LoginRequest {
            email: "ana@saby.io".to_string(),
            password: "hunter22".to_string(),
            remember: true,
        };
        let result = gateway.login(&request).await;

        assert_eq!(result, Err(AuthError::InvalidCredentials));
        assert!(modal.is_open());
        assert_eq!(modal.view(), Some(AuthView::Login));
    }

    #[tokio::test]
    async fn test_reset_flow_reaches_home_only_after_verification() {
        let failing = FailingGateway::new(AuthError::InvalidOtp, PaymentError::CardDeclined);
        let simulated = SimulatedGateway::instant();
        let mut modal = AuthModalState::closed();
        modal.open(AuthView::Login);
        modal.forgot_password();

        simulated
            .request_password_reset("ana@saby.io")
            .await
            .expect("simulated gateway succeeds");
        modal.forgot_submitted();
        assert_eq!(modal.view(), Some(AuthView::Otp));

        let mut challenge = OtpChallenge::new("ana@saby.io");
        challenge.paste("481 516");
        let code = challenge.code().expect("six digits pasted");

        assert_eq!(
            failing.verify_otp(challenge.email(), &code).await,
            Err(AuthError::InvalidOtp)
        );
        assert_eq!(modal.view(), Some(AuthView::Otp));

        simulated
            .verify_otp(challenge.email(), &code)
            .await
            .expect("simulated gateway succeeds");
        assert_eq!(modal.otp_verified(), Some(Redirect::Home));
        assert!(!modal.is_open());
    }

    #[tokio::test]
    async fn test_rate_limited_resend_extends_cooldown() {
        let gateway = FailingGateway::new(
            AuthError::RateLimited {
                retry_after_secs: 90,
            },
            PaymentError::CardDeclined,
        );
        let mut challenge = OtpChallenge::new("ana@saby.io");
        for _ in 0..RESEND_COOLDOWN_SECS {
            challenge.tick();
        }
        assert!(challenge.resend());

        if let Err(AuthError::RateLimited { retry_after_secs }) =
            gateway.resend_otp(challenge.email()).await
        {
            challenge.hold_for(retry_after_secs);
        }
        assert_eq!(challenge.cooldown_secs(), 90);
        assert_eq!(challenge.resend_label(), "Resend in 90s");
    }

    #[tokio::test]
    async fn test_signup_conflict_is_reported() {
        let gateway = FailingGateway::new(AuthError::InvalidCredentials, PaymentError::CardDeclined);
        let request = SignupRequest {
            name: "Ana".to_string(),
            email: "ana@saby.io".to_string(),
            password: "correct horse".to_string(),
        };
        let err = gateway.signup(&request).await.unwrap_err();
        assert_eq!(err.to_string(), "An account with this email already exists");
    }
}
