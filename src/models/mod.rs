//! Request and response types for the LongSwipe API.
//!
//! Wire names are camelCase. Foreign keys that may be absent are `Option<Uuid>`,
//! never the nil UUID. Response types treat missing and `null` fields as their
//! default value, so partial payloads still decode.

mod catalog;
mod customer;
mod de;
mod envelope;
mod escrow;
mod invoice;
mod payment;
mod user;
mod voucher;

pub use catalog::{
    BlockchainNetwork, CryptoCurrency, CryptoNetwork, Currency, CurrencyDetails, CurrencyList,
    Pagination,
};
pub use customer::{Customer, CustomerPage, CustomerUpdate, NewCustomer};
pub use envelope::{Acknowledgement, Envelope};
pub use escrow::{
    AddEscrowRecipient, ConfirmFundRelease, Escrow, EscrowInitiated, EscrowOtpRequest,
    EscrowRecipient, EscrowRequest, EscrowStatus, FundReleaseRequest, FundRequest,
    RecipientAccount, RecipientPayoutDetails, ResetAuthorizationCode, SystemRelease,
    UpdateEscrowStatus,
};
pub use invoice::{
    AllowedInvoiceCurrency, ApproveInvoiceRequest, CreateInvoiceRequest, Invoice, InvoiceItem,
    InvoiceItemRequest, InvoicePage, InvoiceQuery,
};
pub use payment::{
    AddressDepositChargeRequest, AddressDepositRequest, ChargeEstimate, CustomerPayout,
    DepositAddress, Metadata, PaymentRequest, Transaction,
};
pub use user::{MerchantUser, NewMerchantUser, UserProfile};
pub use voucher::{
    CryptoVoucherDetails, GenerateVoucherRequest, PayoutCharges, RedeemRequest, RedeemedVoucher,
    RedemptionDetails, VerifyVoucherRequest, Voucher,
};
