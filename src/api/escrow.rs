use http::Method;

use super::SERVER;
use crate::metadata::RequestMetadata;
use crate::models::{
    Acknowledgement, AddEscrowRecipient, ConfirmFundRelease, Envelope, Escrow, EscrowInitiated,
    EscrowOtpRequest, EscrowRequest, FundReleaseRequest, FundRequest, RecipientAccount,
    RecipientPayoutDetails, ResetAuthorizationCode, SystemRelease, UpdateEscrowStatus,
};
use crate::{Client, Response, Result};

impl Client {
    /// Opens an escrow. Funds are held until every recipient approves release.
    pub async fn initiate_escrow(&self, request: &EscrowRequest) -> Result<Envelope<EscrowInitiated>> {
        self.post(format!("{SERVER}/initiate-escrow"), request)
            .await
            .map(Response::into_data)
    }

    /// Moves an escrow to a new status, for example to cancel it.
    pub async fn update_escrow(&self, update: &UpdateEscrowStatus) -> Result<Acknowledgement> {
        self.patch(format!("{SERVER}/update-escrow"), update)
            .await
            .map(Response::into_data)
    }

    /// Returns the payment instructions for funding an escrow.
    pub async fn escrow_fund_request(&self, escrow_id: &str) -> Result<Envelope<FundRequest>> {
        self.get(format!("{SERVER}/escrow-fund-request/{escrow_id}"))
            .await
            .map(Response::into_data)
    }

    /// Lists every escrow the merchant has opened.
    pub async fn escrows(&self) -> Result<Envelope<Vec<Escrow>>> {
        self.get(format!("{SERVER}/fetch-all-escrows"))
            .await
            .map(Response::into_data)
    }

    /// Fetches one escrow with its recipients.
    pub async fn escrow_details(&self, escrow_id: &str) -> Result<Envelope<Escrow>> {
        self.get(format!("{SERVER}/escrow-details/{escrow_id}"))
            .await
            .map(Response::into_data)
    }

    /// Sends a one-time password to a recipient so they can confirm a release.
    pub async fn request_escrow_otp(&self, request: &EscrowOtpRequest) -> Result<Acknowledgement> {
        self.post(format!("{SERVER}/escrow-request-otp"), request)
            .await
            .map(Response::into_data)
    }

    /// Adds a party whose approval the release requires.
    pub async fn add_escrow_recipient(&self, request: &AddEscrowRecipient) -> Result<Acknowledgement> {
        self.post(format!("{SERVER}/add-escrow-recipient"), request)
            .await
            .map(Response::into_data)
    }

    /// Removes a recipient from an escrow. The email is sent as a query parameter.
    pub async fn delete_escrow_recipient(&self, escrow_id: &str, email: &str) -> Result<Acknowledgement> {
        let metadata = RequestMetadata::new(
            Method::DELETE,
            format!("{SERVER}/delete-escrow-user/{escrow_id}"),
        )
        .with_query_param("email", email);
        self.execute::<(), _>(metadata, None)
            .await
            .map(Response::into_data)
    }

    /// Starts a release on a recipient's behalf; the recipient then receives an OTP.
    pub async fn request_fund_release(&self, request: &FundReleaseRequest) -> Result<Acknowledgement> {
        self.post(format!("{SERVER}/escrow-fund-release-request"), request)
            .await
            .map(Response::into_data)
    }

    /// Releases held funds once the recipient's OTP and the authorization code check out.
    pub async fn release_funds(&self, request: &ConfirmFundRelease) -> Result<Acknowledgement> {
        self.post(format!("{SERVER}/escrow-fund-release"), request)
            .await
            .map(Response::into_data)
    }

    /// Releases funds to a recipient without their confirmation.
    pub async fn system_release(&self, request: &SystemRelease) -> Result<Acknowledgement> {
        self.post(format!("{SERVER}/escrow-system-fund-release"), request)
            .await
            .map(Response::into_data)
    }

    /// Replaces the authorization code returned by [`initiate_escrow`](Self::initiate_escrow).
    pub async fn reset_authorization_code(
        &self,
        request: &ResetAuthorizationCode,
    ) -> Result<Acknowledgement> {
        self.post(format!("{SERVER}/escrow-reset-authorization-code"), request)
            .await
            .map(Response::into_data)
    }

    /// Records where a recipient's share should be paid out.
    pub async fn add_recipient_payout_details(
        &self,
        request: &RecipientPayoutDetails,
    ) -> Result<Envelope<RecipientAccount>> {
        self.post(format!("{SERVER}/escrow-recipient-payout-details"), request)
            .await
            .map(Response::into_data)
    }
}
