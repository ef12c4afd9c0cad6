use super::{INTEGRATIONS, SERVER};
use crate::models::{
    Acknowledgement, Envelope, GenerateVoucherRequest, RedeemRequest, RedemptionDetails,
    VerifyVoucherRequest, Voucher,
};
use crate::{Client, Response, Result};

impl Client {
    /// Quotes the fees and exchange rate for redeeming a voucher, without redeeming it.
    pub async fn voucher_redemption_charges(
        &self,
        request: &RedeemRequest,
    ) -> Result<Envelope<RedemptionDetails>> {
        self.post(format!("{INTEGRATIONS}/fetch-voucher-redemption-charges"), request)
            .await
            .map(Response::into_data)
    }

    /// Returns the voucher behind a code, including its balance and redemption history.
    pub async fn verify_voucher(&self, request: &VerifyVoucherRequest) -> Result<Envelope<Voucher>> {
        self.post(format!("{INTEGRATIONS}/verify-voucher"), request)
            .await
            .map(Response::into_data)
    }

    /// Redeems some or all of a voucher's balance into the merchant account.
    pub async fn redeem_voucher(&self, request: &RedeemRequest) -> Result<Acknowledgement> {
        self.post(format!("{INTEGRATIONS}/redeem-voucher"), request)
            .await
            .map(Response::into_data)
    }

    /// Purchases a voucher for one of the merchant's customers.
    pub async fn generate_voucher(&self, request: &GenerateVoucherRequest) -> Result<Acknowledgement> {
        self.post(format!("{SERVER}/generate-voucher-for-customer"), request)
            .await
            .map(Response::into_data)
    }
}
