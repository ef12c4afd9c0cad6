use super::SERVER;
use crate::models::{Acknowledgement, Envelope, MerchantUser, NewMerchantUser};
use crate::{Client, Response, Result};

impl Client {
    /// Invites a team member to the merchant account.
    pub async fn add_user(&self, user: &NewMerchantUser) -> Result<Acknowledgement> {
        self.post(format!("{SERVER}/add-new-user"), user)
            .await
            .map(Response::into_data)
    }

    /// Lists the merchant's team members.
    pub async fn merchant_users(&self) -> Result<Envelope<Vec<MerchantUser>>> {
        self.get(format!("{SERVER}/fetch-merchant-users"))
            .await
            .map(Response::into_data)
    }
}
