use soroban_sdk::{contracttype, Address, Symbol, Vec};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Global configuration, written once by `init`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Owner of the contract: manages protocol fees and the fee collector.
    pub admin: Address,
    /// Token contract backing `PaymentAsset::Native`.
    pub native_token: Address,
    /// Receives protocol fees at stream creation.
    pub fee_collector: Address,
    /// Identity of the ownership token minted for every stream.
    pub nft_token: Symbol,
}

// ---------------------------------------------------------------------------
// Streams
// ---------------------------------------------------------------------------

/// Asset a stream is denominated in.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PaymentAsset {
    Native,
    Token(Address),
}

/// Deposit attached to a creation call.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Payment {
    pub asset: PaymentAsset,
    pub amount: i128,
}

/// Rational exponent shaping a segment's curve. `1/1` is linear.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Exponent {
    pub numerator: u32,
    pub denominator: u32,
}

impl Exponent {
    pub const LINEAR: Exponent = Exponent {
        numerator: 1,
        denominator: 1,
    };

    pub fn is_linear(&self) -> bool {
        self.numerator == self.denominator
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Segment {
    pub amount: i128,
    pub exponent: Exponent,
    pub duration: u64,
}

/// Balances frozen at cancellation, each withdrawn once by its owner.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CancelBalances {
    pub sender_balance: i128,
    pub recipient_balance: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CancellationState {
    NotCancelled,
    Cancelled(CancelBalances),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Stream {
    pub id: u64,
    pub sender: Address,
    pub nft_nonce: u64,
    pub payment_asset: PaymentAsset,
    /// Net of broker and protocol fees.
    pub deposit: i128,
    pub claimed_amount: i128,
    pub can_cancel: bool,
    pub start_time: u64,
    pub end_time: u64,
    /// Duration after `start_time` during which nothing vests.
    pub cliff: u64,
    pub segments: Vec<Segment>,
    pub cancellation: CancellationState,
}

impl Stream {
    pub fn cancel_balances(&self) -> Option<CancelBalances> {
        match &self.cancellation {
            CancellationState::Cancelled(balances) => Some(balances.clone()),
            CancellationState::NotCancelled => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self.cancellation, CancellationState::Cancelled(_))
    }

    pub fn remaining_balance(&self) -> i128 {
        self.deposit - self.claimed_amount
    }
}

/// Derived lifecycle status of a stream; never stored.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StreamStatus {
    Pending = 0,
    InProgress = 1,
    Cancelled = 2,
    Settled = 3,
    Finished = 4,
}

/// Optional creation settings. `None` means no cliff, cancellable, no broker.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StreamSettings {
    pub cliff: u64,
    pub can_cancel: bool,
    pub broker: Option<BrokerFee>,
}

impl StreamSettings {
    pub fn defaults() -> Self {
        StreamSettings {
            cliff: 0,
            can_cancel: true,
            broker: None,
        }
    }
}

/// Referral fee taken from the gross deposit, in basis points.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BrokerFee {
    pub address: Address,
    pub fee_bps: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimResult {
    pub stream_id: u64,
    pub nft_nonce: u64,
    pub payment_asset: PaymentAsset,
    pub amount: i128,
    pub is_finalized: bool,
}

// ---------------------------------------------------------------------------
// Ownership token
// ---------------------------------------------------------------------------

/// A presented unit of the ownership token. Claims made as the recipient
/// must name exactly one unit of the stream's serial.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StreamNft {
    pub token: Symbol,
    pub nonce: u64,
    pub amount: i128,
}

/// Attributes carried by a stream's ownership token, mirroring the record.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StreamAttributes {
    pub sender: Address,
    pub payment_asset: PaymentAsset,
    pub deposit: i128,
    pub remaining_balance: i128,
    pub can_cancel: bool,
    pub start_time: u64,
    pub end_time: u64,
    pub cliff: u64,
    pub is_cancelled: bool,
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StreamEvent {
    /// stream id, net deposit, gross deposit
    Created(u64, i128, i128),
    /// stream id, amount
    Claimed(u64, i128),
    /// stream id, streamed until cancellation
    Cancelled(u64, i128),
    Finished(u64),
    CancelRenounced(u64),
}

/// Namespace for all contract storage keys.
#[contracttype]
pub enum DataKey {
    Config,                    // Instance: global settings.
    LastStreamId,              // Instance: id of the most recently created stream.
    Stream(u64),               // Persistent: stream record by id.
    StreamByNft(u64),          // Persistent: ownership token serial -> stream id.
    ProtocolFee(PaymentAsset), // Persistent: fee in bps; absent means no fee.
    NftOwner(u64),             // Persistent: holder of an ownership token serial.
    NftAttributes(u64),        // Persistent: attributes of an ownership token serial.
}
