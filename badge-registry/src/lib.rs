#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub const ERR_NOT_MINTER: &str = "NotMinter";
pub const ERR_NOT_OWNER: &str = "NotOwner";
pub const ERR_UNKNOWN_BADGE: &str = "UnknownBadge";
pub const ERR_ZERO_ADDRESS: &str = "ZeroAddress";

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Badge<M: ManagedTypeApi> {
    pub id: u64,
    pub holder: ManagedAddress<M>,
    /// 0 when the badge is not tied to a mission
    pub mission_id: u64,
    pub metadata_ref: ManagedBuffer<M>,
    pub minted_at: u64,
}

/// Achievement badges. Records are minted by a single minter (the mission
/// protocol) and never move.
#[multiversx_sc::contract]
pub trait BadgeRegistry {
    #[init]
    fn init(&self, minter: ManagedAddress) {
        require!(!minter.is_zero(), ERR_ZERO_ADDRESS);
        self.owner().set(self.blockchain().get_caller());
        self.minter().set(&minter);
        self.badge_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(mint)]
    fn mint(&self, to: ManagedAddress, mission_id: u64, metadata_ref: ManagedBuffer) -> u64 {
        require!(
            self.blockchain().get_caller() == self.minter().get(),
            ERR_NOT_MINTER
        );
        require!(!to.is_zero(), ERR_ZERO_ADDRESS);

        let badge_id = self.badge_count().get() + 1;
        self.badge_count().set(badge_id);

        let minted_at = self.blockchain().get_block_timestamp();
        self.badges(badge_id).set(Badge {
            id: badge_id,
            holder: to.clone(),
            mission_id,
            metadata_ref,
            minted_at,
        });
        self.holder_badges(&to).push(&badge_id);

        self.badge_minted_event(badge_id, &to, mission_id, minted_at);

        badge_id
    }

    #[endpoint(setMinter)]
    fn set_minter(&self, minter: ManagedAddress) {
        require!(
            self.blockchain().get_caller() == self.owner().get(),
            ERR_NOT_OWNER
        );
        require!(!minter.is_zero(), ERR_ZERO_ADDRESS);
        self.minter().set(&minter);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getInfo)]
    fn get_info(&self, badge_id: u64) -> MultiValue2<u64, ManagedBuffer> {
        let badge = self.require_badge(badge_id);
        (badge.mission_id, badge.metadata_ref).into()
    }

    #[view(getBadge)]
    fn get_badge(&self, badge_id: u64) -> Badge<Self::Api> {
        self.require_badge(badge_id)
    }

    #[view(getBadgeHolder)]
    fn get_badge_holder(&self, badge_id: u64) -> ManagedAddress {
        self.require_badge(badge_id).holder
    }

    #[view(getBadgesOf)]
    fn get_badges_of(&self, holder: &ManagedAddress) -> MultiValueEncoded<u64> {
        let mut result = MultiValueEncoded::new();
        for badge_id in self.holder_badges(holder).iter() {
            result.push(badge_id);
        }
        result
    }

    #[view(getBadgeCount)]
    fn get_badge_count(&self) -> u64 {
        self.badge_count().get()
    }

    fn require_badge(&self, badge_id: u64) -> Badge<Self::Api> {
        require!(!self.badges(badge_id).is_empty(), ERR_UNKNOWN_BADGE);
        self.badges(badge_id).get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("badgeMinted")]
    fn badge_minted_event(
        &self,
        #[indexed] badge_id: u64,
        #[indexed] holder: &ManagedAddress,
        #[indexed] mission_id: u64,
        minted_at: u64,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("minter")]
    fn minter(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("badgeCount")]
    fn badge_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("badges")]
    fn badges(&self, badge_id: u64) -> SingleValueMapper<Badge<Self::Api>>;

    #[storage_mapper("holderBadges")]
    fn holder_badges(&self, holder: &ManagedAddress) -> VecMapper<u64>;
}
