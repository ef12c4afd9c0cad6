use super::{INTEGRATIONS, SERVER};
use crate::models::{
    Acknowledgement, AddressDepositChargeRequest, AddressDepositRequest, ChargeEstimate,
    CustomerPayout, DepositAddress, Envelope, PaymentRequest, Transaction, UserProfile,
};
use crate::{Client, Response, Result};

impl Client {
    /// Asks a LongSwipe user to pay the merchant.
    pub async fn payment_request(&self, request: &PaymentRequest) -> Result<Acknowledgement> {
        self.post(format!("{INTEGRATIONS}/payment-request"), request)
            .await
            .map(Response::into_data)
    }

    /// Creates a temporary blockchain address the payer deposits into.
    pub async fn address_deposit_request(
        &self,
        request: &AddressDepositRequest,
    ) -> Result<Envelope<DepositAddress>> {
        self.post(format!("{INTEGRATIONS}/deposit-address-payment-request"), request)
            .await
            .map(Response::into_data)
    }

    /// Quotes the charges of an address deposit.
    pub async fn deposit_charges(
        &self,
        request: &AddressDepositChargeRequest,
    ) -> Result<Envelope<ChargeEstimate>> {
        self.post(format!("{INTEGRATIONS}/request-wallet-deposit-charges"), request)
            .await
            .map(Response::into_data)
    }

    /// Fetches a transaction by the merchant's reference id.
    pub async fn verify_transaction(&self, reference_id: &str) -> Result<Envelope<Transaction>> {
        self.get(format!("{SERVER}/verify-transaction/{reference_id}"))
            .await
            .map(Response::into_data)
    }

    /// Resolves an email, username or phone number to a LongSwipe user.
    pub async fn confirm_user(&self, identifier: &str) -> Result<Envelope<UserProfile>> {
        self.get(format!("{INTEGRATIONS}/confirm-user/{identifier}"))
            .await
            .map(Response::into_data)
    }

    /// Pays out from the merchant balance to a LongSwipe user.
    pub async fn payout(&self, payout: &CustomerPayout) -> Result<Acknowledgement> {
        self.post(format!("{SERVER}/payout"), payout)
            .await
            .map(Response::into_data)
    }
}
