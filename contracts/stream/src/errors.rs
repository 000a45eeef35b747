use soroban_sdk::contracterror;

#[contracterror]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum StreamError {
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Stream creation
    ZeroDeposit = 3,
    StreamToContract = 4,
    StreamToCaller = 5,
    StartTimeInPast = 6,
    EndTimeBeforeStart = 7,
    CliffTooBig = 8,
    SegmentDurationZero = 9,
    SegmentExponentDenominatorZero = 10,
    InvalidSegmentsDuration = 11,
    InvalidSegmentsDeposit = 12,
    TooManySegments = 13,

    // Fees
    BrokerFeeTooBig = 14,
    ProtocolFeeZero = 15,
    ProtocolFeeTooBig = 16,

    // Authorization
    InvalidRole = 17,
    OnlySenderCanRenounce = 18,

    // Stream state
    StreamNotFound = 19,
    CantCancel = 20,
    StreamNotCancelled = 21,
    ZeroClaim = 22,
    CantClaim = 23,
    TooManyClaims = 24,

    // Ownership token
    NftNotOwned = 25,
}
