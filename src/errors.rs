// ── Structural / validation ──
pub const ERR_INVALID_MISSION: &str = "InvalidMission";
pub const ERR_MISSION_NOT_ACTIVE: &str = "MissionNotActive";
pub const ERR_INVALID_PROPOSAL: &str = "InvalidProposal";
pub const ERR_ARRAY_LENGTH_MISMATCH: &str = "ArrayLengthMismatch";
pub const ERR_TOO_MANY_USERS: &str = "TooManyUsers";
pub const ERR_INVALID_DATE_RANGE: &str = "InvalidDateRange";
pub const ERR_INVALID_BUDGET: &str = "InvalidBudget";
pub const ERR_INVALID_DATE: &str = "InvalidDate";
pub const ERR_ATTESTATION_EXPIRED: &str = "AttestationExpired";
pub const ERR_INVALID_PAYMENT: &str = "InvalidPayment";
pub const ERR_NO_VERIFIERS: &str = "NoVerifiers";
pub const ERR_ZERO_ADDRESS: &str = "ZeroAddress";
pub const ERR_INVALID_ATTESTATION_AGE: &str = "InvalidAttestationAge";
pub const ERR_VERIFIER_ALREADY_ADDED: &str = "VerifierAlreadyAdded";
pub const ERR_VERIFIER_NOT_FOUND: &str = "VerifierNotFound";

// ── Authorization ──
pub const ERR_NOT_OWNER: &str = "NotOwner";
pub const ERR_NOT_MISSION_CREATOR: &str = "NotMissionCreator";
pub const ERR_NOT_PROPOSAL_CREATOR: &str = "NotProposalCreator";
pub const ERR_UNAUTHORIZED_VERIFIER: &str = "UnauthorizedVerifier";

// ── Consistency ──
pub const ERR_ALREADY_PROCESSED: &str = "AlreadyProcessed";
pub const ERR_ALREADY_APPROVED: &str = "AlreadyApproved";
pub const ERR_PROPOSAL_CANCELLED: &str = "ProposalCancelled";
pub const ERR_INSUFFICIENT_BUDGET: &str = "InsufficientBudget";
pub const ERR_BUDGET_BELOW_SPENT: &str = "BudgetBelowSpent";
pub const ERR_REENTRANT_CALL: &str = "ReentrantCall";
pub const ERR_REWARD_TRANSFER_FAILED: &str = "RewardTransferFailed";
pub const ERR_BADGE_REGISTRY_NOT_SET: &str = "BadgeRegistryNotSet";
