#![no_std]

mod accrual;
pub mod errors;
mod events;
mod fees;
mod fixed_point;
mod ownership;
mod settlement;
mod storage;
pub mod types;

use soroban_sdk::{contract, contractimpl, token, vec, Address, Env, Symbol, Vec};

pub use crate::errors::StreamError;
pub use crate::fees::{BPS_SCALE, MAX_BROKER_FEE_BPS};
pub use crate::types::{
    BrokerFee, CancelBalances, CancellationState, ClaimResult, Config, Exponent, Payment,
    PaymentAsset, Segment, Stream, StreamAttributes, StreamEvent, StreamNft, StreamSettings,
    StreamStatus,
};

use crate::ownership::Role;

/// Upper bound on the number of segments in a single stream.
pub const MAX_SEGMENTS: u32 = 10;

/// Upper bound on the number of streams claimed by `claim_from_streams`.
pub const MAX_CLAIMS_PER_TX: u32 = 250;

/// Vesting curve requested by a creation entrypoint, before fees are known.
enum Schedule {
    /// A single linear segment spanning the whole window.
    Linear,
    Segments(Vec<Segment>),
}

// ---------------------------------------------------------------------------
// Internal Helpers
// ---------------------------------------------------------------------------

impl VestingStream {
    fn asset_address(config: &Config, asset: &PaymentAsset) -> Address {
        match asset {
            PaymentAsset::Native => config.native_token.clone(),
            PaymentAsset::Token(address) => address.clone(),
        }
    }

    /// Transfers `amount` of `asset` out of the contract. Zero amounts are skipped.
    fn pay(env: &Env, config: &Config, asset: &PaymentAsset, to: &Address, amount: i128) {
        if amount <= 0 {
            return;
        }
        let token_client = token::Client::new(env, &Self::asset_address(config, asset));
        token_client.transfer(&env.current_contract_address(), to, &amount);
    }

    fn validate_segments(
        segments: &Vec<Segment>,
        deposit: i128,
        window: u64,
    ) -> Result<(), StreamError> {
        if segments.len() > MAX_SEGMENTS {
            return Err(StreamError::TooManySegments);
        }

        let mut segments_duration = 0u64;
        let mut segments_deposit = 0i128;
        for segment in segments.iter() {
            if segment.duration == 0 {
                return Err(StreamError::SegmentDurationZero);
            }
            if segment.exponent.denominator == 0 {
                return Err(StreamError::SegmentExponentDenominatorZero);
            }
            if segment.amount < 0 {
                return Err(StreamError::InvalidSegmentsDeposit);
            }
            segments_duration = segments_duration
                .checked_add(segment.duration)
                .ok_or(StreamError::InvalidSegmentsDuration)?;
            segments_deposit = segments_deposit
                .checked_add(segment.amount)
                .ok_or(StreamError::InvalidSegmentsDeposit)?;
        }

        if segments_duration != window {
            return Err(StreamError::InvalidSegmentsDuration);
        }
        if segments_deposit != deposit {
            return Err(StreamError::InvalidSegmentsDeposit);
        }
        Ok(())
    }

    fn total_duration(segments: &Vec<Segment>) -> Result<u64, StreamError> {
        segments.iter().try_fold(0u64, |total, segment| {
            total
                .checked_add(segment.duration)
                .ok_or(StreamError::InvalidSegmentsDuration)
        })
    }

    /// Single creation path shared by every `create_stream*` entrypoint.
    ///
    /// All checks run before the first transfer. The gross deposit is pulled
    /// from the sender, fees are paid out, and the remainder is locked in the
    /// new stream whose ownership token goes to `recipient`.
    #[allow(clippy::too_many_arguments)]
    fn create_validated(
        env: &Env,
        sender: Address,
        recipient: Address,
        payment: Payment,
        start_time: u64,
        end_time: u64,
        schedule: Schedule,
        settings: StreamSettings,
    ) -> Result<u64, StreamError> {
        let config = storage::get_config(env)?;

        if recipient == env.current_contract_address() {
            return Err(StreamError::StreamToContract);
        }
        if recipient == sender {
            return Err(StreamError::StreamToCaller);
        }
        if payment.amount <= 0 {
            return Err(StreamError::ZeroDeposit);
        }

        let now = env.ledger().timestamp();
        if start_time < now {
            return Err(StreamError::StartTimeInPast);
        }
        if end_time <= start_time {
            return Err(StreamError::EndTimeBeforeStart);
        }
        let window = end_time - start_time;
        if settings.cliff > window {
            return Err(StreamError::CliffTooBig);
        }

        let fees = fees::apply_fees(
            payment.amount,
            storage::get_protocol_fee(env, &payment.asset),
            settings.broker.as_ref(),
        )?;

        let segments = match schedule {
            Schedule::Linear => vec![
                env,
                Segment {
                    amount: fees.net_deposit,
                    exponent: Exponent::LINEAR,
                    duration: window,
                },
            ],
            Schedule::Segments(segments) => segments,
        };
        Self::validate_segments(&segments, fees.net_deposit, window)?;

        // Pull the gross deposit, then settle fees out of it. If the sender
        // cannot cover the deposit the transfer traps and nothing persists.
        let contract = env.current_contract_address();
        let token_client = token::Client::new(env, &Self::asset_address(&config, &payment.asset));
        token_client.transfer(&sender, &contract, &payment.amount);
        if fees.protocol_fee > 0 {
            token_client.transfer(&contract, &config.fee_collector, &fees.protocol_fee);
        }
        if let Some(broker) = settings.broker.as_ref() {
            if fees.broker_fee > 0 {
                token_client.transfer(&contract, &broker.address, &fees.broker_fee);
            }
        }

        let stream_id = storage::next_stream_id(env);
        let stream = Stream {
            id: stream_id,
            sender,
            nft_nonce: stream_id,
            payment_asset: payment.asset,
            deposit: fees.net_deposit,
            claimed_amount: 0,
            can_cancel: settings.can_cancel,
            start_time,
            end_time,
            cliff: settings.cliff,
            segments,
            cancellation: CancellationState::NotCancelled,
        };

        storage::save_stream(env, &stream);
        storage::index_stream_nft(env, &stream);
        ownership::mint(env, &stream, &recipient);
        storage::bump_instance(env);

        events::stream_created(env, &stream, &recipient, payment.amount);
        Ok(stream_id)
    }

    /// Pays out everything vested and not yet claimed to `to`.
    fn claim_vested(
        env: &Env,
        config: &Config,
        mut stream: Stream,
        to: &Address,
    ) -> Result<ClaimResult, StreamError> {
        if stream.is_cancelled() {
            return Err(StreamError::CantClaim);
        }

        let vested = accrual::calculate_vested_amount(&stream, env.ledger().timestamp());
        let amount = vested - stream.claimed_amount;
        if amount <= 0 {
            return Err(StreamError::ZeroClaim);
        }

        stream.claimed_amount += amount;
        let is_finalized = stream.claimed_amount == stream.deposit;
        if is_finalized {
            Self::remove(env, &stream);
        } else {
            storage::save_stream(env, &stream);
            ownership::refresh_attributes(env, &stream);
        }

        Self::pay(env, config, &stream.payment_asset, to, amount);

        events::stream_claimed(env, stream.id, amount, to);
        if is_finalized {
            events::stream_finished(env, stream.id);
        }

        Ok(ClaimResult {
            stream_id: stream.id,
            nft_nonce: stream.nft_nonce,
            payment_asset: stream.payment_asset,
            amount,
            is_finalized,
        })
    }

    /// Terminal step of a stream: drops the record and burns its ownership token.
    fn remove(env: &Env, stream: &Stream) {
        storage::remove_stream(env, stream);
        ownership::burn(env, stream.nft_nonce);
    }
}

// ---------------------------------------------------------------------------
// Contract Implementation
// ---------------------------------------------------------------------------

#[contract]
pub struct VestingStream;

#[contractimpl]
impl VestingStream {
    /// Initialise the contract.
    ///
    /// Must be called exactly once before any other operation.
    ///
    /// # Parameters
    /// - `admin`: Owner of the contract; manages protocol fees and the fee collector
    /// - `native_token`: Token contract standing for `PaymentAsset::Native`
    /// - `fee_collector`: Receives protocol fees when streams are created
    /// - `nft_token`: Identity of the ownership token minted for every stream
    ///
    /// # Errors
    /// - `AlreadyInitialized` if called more than once
    pub fn init(
        env: Env,
        admin: Address,
        native_token: Address,
        fee_collector: Address,
        nft_token: Symbol,
    ) -> Result<(), StreamError> {
        if storage::has_config(&env) {
            return Err(StreamError::AlreadyInitialized);
        }
        let config = Config {
            admin,
            native_token,
            fee_collector,
            nft_token,
        };
        storage::set_config(&env, &config);
        Ok(())
    }

    /// Rotate the admin key. Requires authorization from the current admin.
    pub fn set_admin(env: Env, new_admin: Address) -> Result<(), StreamError> {
        let mut config = storage::get_config(&env)?;
        let old_admin = config.admin.clone();
        old_admin.require_auth();

        config.admin = new_admin.clone();
        storage::set_config(&env, &config);

        events::admin_updated(&env, &old_admin, &new_admin);
        Ok(())
    }

    /// Change where protocol fees are sent. Admin only.
    pub fn set_fee_collector(env: Env, fee_collector: Address) -> Result<(), StreamError> {
        let mut config = storage::get_config(&env)?;
        config.admin.require_auth();

        config.fee_collector = fee_collector.clone();
        storage::set_config(&env, &config);

        events::fee_collector_updated(&env, &fee_collector);
        Ok(())
    }

    /// Set the protocol fee charged on new streams of `asset`, in basis points.
    ///
    /// # Authorization
    /// - Requires authorization from the admin
    ///
    /// # Errors
    /// - `ProtocolFeeZero` for `fee_bps == 0`; use `remove_protocol_fee` instead
    /// - `ProtocolFeeTooBig` above `BPS_SCALE`
    pub fn set_protocol_fee(
        env: Env,
        asset: PaymentAsset,
        fee_bps: u32,
    ) -> Result<(), StreamError> {
        let config = storage::get_config(&env)?;
        config.admin.require_auth();

        fees::validate_protocol_fee(fee_bps)?;
        storage::set_protocol_fee(&env, &asset, fee_bps);

        events::protocol_fee_set(&env, &asset, fee_bps);
        Ok(())
    }

    /// Stop charging a protocol fee on `asset`. Admin only.
    pub fn remove_protocol_fee(env: Env, asset: PaymentAsset) -> Result<(), StreamError> {
        let config = storage::get_config(&env)?;
        config.admin.require_auth();

        storage::remove_protocol_fee(&env, &asset);

        events::protocol_fee_removed(&env, &asset);
        Ok(())
    }

    /// Protocol fee for `asset` in basis points; 0 when none is configured.
    pub fn get_protocol_fee(env: Env, asset: PaymentAsset) -> u32 {
        storage::get_protocol_fee(&env, &asset).unwrap_or(0)
    }

    pub fn get_config(env: Env) -> Result<Config, StreamError> {
        storage::get_config(&env)
    }

    /// Create a stream with an explicit window and segment list.
    ///
    /// The gross `payment` is pulled from `sender`. Protocol and broker fees
    /// are both computed against the gross amount and paid out immediately;
    /// the segment amounts must add up to what remains. The ownership token
    /// of the new stream is minted to `recipient`.
    ///
    /// # Parameters
    /// - `sender`: Funds the stream (must authorize the transaction)
    /// - `recipient`: Initial holder of the stream's ownership token
    /// - `payment`: Asset and gross amount deposited
    /// - `start_time` / `end_time`: Vesting window (ledger timestamps)
    /// - `segments`: Curve pieces; durations must add up to the window and
    ///   amounts to the net deposit
    /// - `settings`: Cliff, cancellability and broker fee; `None` for defaults
    ///
    /// # Returns
    /// - `u64`: The new stream id. Ids are sequential starting from 1, and
    ///   the ownership token serial equals the stream id.
    ///
    /// # Errors
    /// - `StreamToContract`, `StreamToCaller`: invalid recipient
    /// - `ZeroDeposit`: nothing left once fees are taken
    /// - `StartTimeInPast`, `EndTimeBeforeStart`, `CliffTooBig`: invalid window
    /// - `TooManySegments`, `SegmentDurationZero`, `SegmentExponentDenominatorZero`,
    ///   `InvalidSegmentsDuration`, `InvalidSegmentsDeposit`: invalid segments
    /// - `BrokerFeeTooBig`: broker fee above `MAX_BROKER_FEE_BPS`
    ///
    /// # Events
    /// - `created(stream_id)` with the net and gross deposit
    pub fn create_stream(
        env: Env,
        sender: Address,
        recipient: Address,
        payment: Payment,
        start_time: u64,
        end_time: u64,
        segments: Vec<Segment>,
        settings: Option<StreamSettings>,
    ) -> Result<u64, StreamError> {
        sender.require_auth();
        Self::create_validated(
            &env,
            sender,
            recipient,
            payment,
            start_time,
            end_time,
            Schedule::Segments(segments),
            settings.unwrap_or_else(StreamSettings::defaults),
        )
    }

    /// Create a stream starting now, ending once all `segments` have elapsed.
    pub fn create_stream_now(
        env: Env,
        sender: Address,
        recipient: Address,
        payment: Payment,
        segments: Vec<Segment>,
        settings: Option<StreamSettings>,
    ) -> Result<u64, StreamError> {
        sender.require_auth();
        let start_time = env.ledger().timestamp();
        let end_time = start_time
            .checked_add(Self::total_duration(&segments)?)
            .ok_or(StreamError::EndTimeBeforeStart)?;
        Self::create_validated(
            &env,
            sender,
            recipient,
            payment,
            start_time,
            end_time,
            Schedule::Segments(segments),
            settings.unwrap_or_else(StreamSettings::defaults),
        )
    }

    /// Create a linear stream over an explicit window.
    pub fn create_stream_linear(
        env: Env,
        sender: Address,
        recipient: Address,
        payment: Payment,
        start_time: u64,
        end_time: u64,
        settings: Option<StreamSettings>,
    ) -> Result<u64, StreamError> {
        sender.require_auth();
        Self::create_validated(
            &env,
            sender,
            recipient,
            payment,
            start_time,
            end_time,
            Schedule::Linear,
            settings.unwrap_or_else(StreamSettings::defaults),
        )
    }

    /// Create a linear stream starting now and lasting `duration` seconds.
    pub fn create_stream_duration(
        env: Env,
        sender: Address,
        recipient: Address,
        payment: Payment,
        duration: u64,
        settings: Option<StreamSettings>,
    ) -> Result<u64, StreamError> {
        sender.require_auth();
        let start_time = env.ledger().timestamp();
        let end_time = start_time
            .checked_add(duration)
            .ok_or(StreamError::EndTimeBeforeStart)?;
        Self::create_validated(
            &env,
            sender,
            recipient,
            payment,
            start_time,
            end_time,
            Schedule::Linear,
            settings.unwrap_or_else(StreamSettings::defaults),
        )
    }

    /// Claim everything vested so far.
    ///
    /// Claim rights belong to whoever holds the stream's ownership token:
    /// `caller` must present exactly one unit of it. Funds go to `caller`.
    ///
    /// # Behavior
    /// 1. Claimable = `vested(now) - claimed_amount`
    /// 2. `claimed_amount` grows by the claimable amount
    /// 3. Once `claimed_amount == deposit` the stream is removed and its
    ///    ownership token burned; otherwise the token attributes are refreshed
    ///
    /// # Errors
    /// - `StreamNotFound` for unknown or finished streams
    /// - `InvalidRole` unless `nft` is one unit of this stream's token held by `caller`
    /// - `CantClaim` on cancelled streams (use `claim_from_stream_after_cancel`)
    /// - `ZeroClaim` when nothing is claimable, e.g. before the cliff
    ///
    /// # Examples
    /// - 10 tokens over 600s: at t=300 claims 5; at t=650 claims the other 5
    ///   and the stream is finalized
    pub fn claim_from_stream(
        env: Env,
        caller: Address,
        stream_id: u64,
        nft: StreamNft,
    ) -> Result<ClaimResult, StreamError> {
        caller.require_auth();

        let config = storage::get_config(&env)?;
        let stream = storage::load_stream(&env, stream_id)?;
        ownership::require_recipient(&env, &config, &stream, &caller, &nft)?;

        Self::claim_vested(&env, &config, stream, &caller)
    }

    /// Claim from several streams at once, each identified by the ownership
    /// token unit presented for it. Either every claim succeeds or none does.
    ///
    /// # Errors
    /// - `TooManyClaims` above `MAX_CLAIMS_PER_TX` entries
    /// - Any error `claim_from_stream` would return for one of the entries
    pub fn claim_from_streams(
        env: Env,
        caller: Address,
        nfts: Vec<StreamNft>,
    ) -> Result<Vec<ClaimResult>, StreamError> {
        caller.require_auth();

        if nfts.len() > MAX_CLAIMS_PER_TX {
            return Err(StreamError::TooManyClaims);
        }

        let config = storage::get_config(&env)?;
        let mut results = Vec::new(&env);
        for nft in nfts.iter() {
            let stream_id = storage::stream_id_by_nft(&env, nft.nonce)?;
            let stream = storage::load_stream(&env, stream_id)?;
            ownership::require_recipient(&env, &config, &stream, &caller, &nft)?;
            results.push_back(Self::claim_vested(&env, &config, stream, &caller)?);
        }
        Ok(results)
    }

    /// Cancel a stream, splitting what is left between sender and recipient.
    ///
    /// # Parameters
    /// - `caller`: The sender, or the holder of the ownership token
    /// - `nft`: The presented ownership token unit when cancelling as recipient
    /// - `immediate`: Settle both shares now (default) or record them for
    ///   `claim_from_stream_after_cancel`
    ///
    /// # Behavior
    /// - Recipient share: `vested(now) - claimed_amount`
    /// - Sender share: `deposit - vested(now)`
    /// - Immediate: both shares are paid (the recipient share to the current
    ///   token holder), the stream is removed and its token burned
    /// - Deferred: balances are recorded on the stream and nothing moves
    ///
    /// # Errors
    /// - `StreamNotFound` for unknown or finished streams
    /// - `InvalidRole` when `caller` is neither sender nor presenting the token;
    ///   checked before anything else
    /// - `CantCancel` if the stream is not cancellable, already cancelled or ended
    pub fn cancel_stream(
        env: Env,
        caller: Address,
        stream_id: u64,
        nft: Option<StreamNft>,
        immediate: Option<bool>,
    ) -> Result<(), StreamError> {
        caller.require_auth();

        let config = storage::get_config(&env)?;
        let mut stream = storage::load_stream(&env, stream_id)?;
        let role = ownership::resolve_role(&env, &config, &stream, &caller, &nft)?;

        let now = env.ledger().timestamp();
        settlement::require_cancellable(&stream, now)?;

        let balances = settlement::split_at(&stream, now);
        let streamed = stream.claimed_amount + balances.recipient_balance;

        if immediate.unwrap_or(true) {
            let recipient = match role {
                Role::Recipient => caller.clone(),
                Role::Sender => ownership::owner_of(&env, stream.nft_nonce)
                    .ok_or(StreamError::StreamNotFound)?,
            };

            Self::remove(&env, &stream);
            Self::pay(
                &env,
                &config,
                &stream.payment_asset,
                &stream.sender,
                balances.sender_balance,
            );
            Self::pay(
                &env,
                &config,
                &stream.payment_asset,
                &recipient,
                balances.recipient_balance,
            );

            events::stream_cancelled(&env, stream_id, &caller, streamed);
            events::stream_finished(&env, stream_id);
        } else {
            stream.cancellation = CancellationState::Cancelled(balances);
            storage::save_stream(&env, &stream);
            ownership::refresh_attributes(&env, &stream);

            events::stream_cancelled(&env, stream_id, &caller, streamed);
        }
        Ok(())
    }

    /// Withdraw the caller's share recorded by a deferred cancellation.
    ///
    /// The sender withdraws `sender_balance`; the ownership token holder
    /// withdraws `recipient_balance`. Once both are withdrawn the stream is
    /// removed and its token burned.
    ///
    /// # Returns
    /// - `i128`: The amount paid to `caller`
    ///
    /// # Errors
    /// - `StreamNotFound` for unknown or finished streams
    /// - `InvalidRole` when `caller` is neither sender nor presenting the token
    /// - `StreamNotCancelled` if no balances were recorded
    /// - `ZeroClaim` if the caller's share was already withdrawn or is zero
    pub fn claim_from_stream_after_cancel(
        env: Env,
        caller: Address,
        stream_id: u64,
        nft: Option<StreamNft>,
    ) -> Result<i128, StreamError> {
        caller.require_auth();

        let config = storage::get_config(&env)?;
        let mut stream = storage::load_stream(&env, stream_id)?;
        let role = ownership::resolve_role(&env, &config, &stream, &caller, &nft)?;

        let mut balances = stream
            .cancel_balances()
            .ok_or(StreamError::StreamNotCancelled)?;
        let amount = settlement::withdraw_share(&mut balances, role)?;
        let is_settled = settlement::is_settled(&balances);

        if role == Role::Recipient {
            stream.claimed_amount += amount;
        }
        stream.cancellation = CancellationState::Cancelled(balances);
        if is_settled {
            Self::remove(&env, &stream);
        } else {
            storage::save_stream(&env, &stream);
            ownership::refresh_attributes(&env, &stream);
        }

        Self::pay(&env, &config, &stream.payment_asset, &caller, amount);

        if role == Role::Recipient {
            events::stream_claimed(&env, stream_id, amount, &caller);
        }
        if is_settled {
            events::stream_finished(&env, stream_id);
        }
        Ok(amount)
    }

    /// Permanently give up the right to cancel. Sender only.
    ///
    /// # Errors
    /// - `StreamNotFound` for unknown or finished streams
    /// - `OnlySenderCanRenounce` for any caller other than the sender,
    ///   including the token holder
    /// - `CantCancel` if the stream is already non-cancellable, cancelled or ended
    pub fn renounce_cancel_stream(
        env: Env,
        caller: Address,
        stream_id: u64,
    ) -> Result<(), StreamError> {
        caller.require_auth();

        let mut stream = storage::load_stream(&env, stream_id)?;
        ownership::require_sender(&stream, &caller)?;
        settlement::require_cancellable(&stream, env.ledger().timestamp())?;

        stream.can_cancel = false;
        storage::save_stream(&env, &stream);
        ownership::refresh_attributes(&env, &stream);

        events::cancel_renounced(&env, stream_id);
        Ok(())
    }

    /// Transfer a stream's ownership token, and with it the recipient rights.
    pub fn transfer_stream_nft(
        env: Env,
        from: Address,
        to: Address,
        nonce: u64,
    ) -> Result<(), StreamError> {
        from.require_auth();

        ownership::transfer(&env, &from, &to, nonce)?;

        events::stream_nft_transferred(&env, nonce, &from, &to);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Views
    // -----------------------------------------------------------------------

    pub fn get_stream_data(env: Env, stream_id: u64) -> Result<Stream, StreamError> {
        storage::load_stream(&env, stream_id)
    }

    pub fn get_stream_by_nft(env: Env, nonce: u64) -> Result<Stream, StreamError> {
        let stream_id = storage::stream_id_by_nft(&env, nonce)?;
        storage::load_stream(&env, stream_id)
    }

    pub fn get_last_stream_id(env: Env) -> u64 {
        storage::get_last_stream_id(&env)
    }

    /// Amount the recipient could withdraw right now.
    ///
    /// For cancelled streams this is the recorded recipient balance; otherwise
    /// `vested(now) - claimed_amount`.
    pub fn recipient_balance(env: Env, stream_id: u64) -> Result<i128, StreamError> {
        let stream = storage::load_stream(&env, stream_id)?;
        Ok(settlement::recipient_balance_at(&stream, env.ledger().timestamp()))
    }

    /// Amount that would return to the sender on cancellation right now, or the
    /// recorded sender balance for cancelled streams.
    pub fn sender_balance(env: Env, stream_id: u64) -> Result<i128, StreamError> {
        let stream = storage::load_stream(&env, stream_id)?;
        Ok(settlement::sender_balance_at(&stream, env.ledger().timestamp()))
    }

    /// Lifecycle status of a stream.
    ///
    /// | Status       | Meaning                                          |
    /// |--------------|--------------------------------------------------|
    /// | `Pending`    | start time not reached                           |
    /// | `InProgress` | vesting                                          |
    /// | `Cancelled`  | cancelled, recorded balances not yet withdrawn   |
    /// | `Settled`    | end time passed, funds not yet fully claimed     |
    /// | `Finished`   | record removed; every unit has been paid out     |
    pub fn status_of(env: Env, stream_id: u64) -> Result<StreamStatus, StreamError> {
        match storage::load_stream(&env, stream_id) {
            Ok(stream) => Ok(settlement::status_at(&stream, env.ledger().timestamp())),
            Err(StreamError::StreamNotFound)
                if stream_id > 0 && stream_id <= storage::get_last_stream_id(&env) =>
            {
                Ok(StreamStatus::Finished)
            }
            Err(err) => Err(err),
        }
    }

    pub fn stream_nft_owner(env: Env, nonce: u64) -> Option<Address> {
        ownership::owner_of(&env, nonce)
    }

    pub fn stream_nft_balance(env: Env, holder: Address, nonce: u64) -> i128 {
        ownership::balance_of(&env, &holder, nonce)
    }

    pub fn stream_nft_attributes(env: Env, nonce: u64) -> Result<StreamAttributes, StreamError> {
        ownership::attributes_of(&env, nonce)
    }
}
