#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub const ERR_UNKNOWN_LEDGER: &str = "UnknownLedger";
pub const ERR_NOT_CONTROLLER: &str = "NotController";
pub const ERR_INVALID_PAYMENT: &str = "InvalidPayment";
pub const ERR_INVALID_AMOUNT: &str = "InvalidAmount";
pub const ERR_INSUFFICIENT_BALANCE: &str = "InsufficientBalance";
pub const ERR_NOT_TRANSFERABLE: &str = "NotTransferable";
pub const ERR_NOT_MERCHANT: &str = "NotMerchant";
pub const ERR_ZERO_ADDRESS: &str = "ZeroAddress";

// ============================================================
// Ledger: one budget-backed unit ledger per mission
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Ledger<M: ManagedTypeApi> {
    pub id: u64,
    /// Creator of the ledger. Only it may mint or edit merchants.
    pub controller: ManagedAddress<M>,
    pub underlying_asset: TokenIdentifier<M>,
    /// When false only the controller can move units with `transfer`.
    pub transferable: bool,
    pub total_supply: BigUint<M>,
}

/// Reward units backed 1:1 by an escrowed underlying asset.
///
/// Holders can spend units at allowlisted merchants, and merchants burn
/// units to withdraw the underlying.
#[multiversx_sc::contract]
pub trait RewardLedger {
    #[init]
    fn init(&self) {
        self.ledger_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: createLedger
    // ========================================================

    #[endpoint(createLedger)]
    fn create_ledger(
        &self,
        underlying_asset: TokenIdentifier,
        transferable: bool,
        merchants: ManagedVec<ManagedAddress>,
    ) -> u64 {
        require!(underlying_asset.is_valid_esdt_identifier(), ERR_INVALID_PAYMENT);

        let caller = self.blockchain().get_caller();
        let ledger_id = self.ledger_count().get() + 1;
        self.ledger_count().set(ledger_id);

        let ledger = Ledger {
            id: ledger_id,
            controller: caller.clone(),
            underlying_asset,
            transferable,
            total_supply: BigUint::zero(),
        };
        self.ledgers(ledger_id).set(&ledger);

        for merchant in merchants.iter() {
            require!(!merchant.is_zero(), ERR_ZERO_ADDRESS);
            self.merchants(ledger_id).insert(merchant.clone_value());
        }

        self.ledger_created_event(ledger_id, &caller, &ledger.underlying_asset, transferable);

        ledger_id
    }

    // ========================================================
    // ENDPOINT: mint
    // Controller deposits the underlying and is credited 1:1.
    // ========================================================

    #[endpoint(mint)]
    #[payable("*")]
    fn mint(&self, ledger_id: u64) {
        let mut ledger = self.require_ledger(ledger_id);
        let caller = self.blockchain().get_caller();
        require!(caller == ledger.controller, ERR_NOT_CONTROLLER);

        let payment = self.call_value().single_esdt();
        require!(
            payment.token_identifier == ledger.underlying_asset && payment.token_nonce == 0,
            ERR_INVALID_PAYMENT
        );
        require!(payment.amount > 0u64, ERR_INVALID_AMOUNT);
        let amount = payment.amount.clone();

        ledger.total_supply += &amount;
        self.ledgers(ledger_id).set(&ledger);
        self.balances(ledger_id, &caller).update(|balance| *balance += &amount);

        self.minted_event(ledger_id, &caller, &amount);
    }

    // ========================================================
    // ENDPOINT: transfer
    // ========================================================

    #[endpoint(transfer)]
    fn transfer(&self, ledger_id: u64, to: ManagedAddress, amount: BigUint) -> bool {
        let ledger = self.require_ledger(ledger_id);
        let caller = self.blockchain().get_caller();
        require!(
            ledger.transferable || caller == ledger.controller,
            ERR_NOT_TRANSFERABLE
        );
        require!(!to.is_zero(), ERR_ZERO_ADDRESS);

        self.move_units(ledger_id, &caller, &to, &amount);

        self.transfer_event(ledger_id, &caller, &to, &amount);
        true
    }

    // ========================================================
    // ENDPOINT: payToMerchant
    // Allowed on non-transferable ledgers too.
    // ========================================================

    #[endpoint(payToMerchant)]
    fn pay_to_merchant(&self, ledger_id: u64, merchant: ManagedAddress, amount: BigUint) {
        self.require_ledger(ledger_id);
        require!(
            self.merchants(ledger_id).contains(&merchant),
            ERR_NOT_MERCHANT
        );

        let caller = self.blockchain().get_caller();
        self.move_units(ledger_id, &caller, &merchant, &amount);

        self.merchant_payment_event(ledger_id, &caller, &merchant, &amount);
    }

    // ========================================================
    // ENDPOINT: redeem
    // Merchant burns units for the underlying asset.
    // ========================================================

    #[endpoint(redeem)]
    fn redeem(&self, ledger_id: u64, amount: BigUint) {
        let mut ledger = self.require_ledger(ledger_id);
        let caller = self.blockchain().get_caller();
        require!(self.merchants(ledger_id).contains(&caller), ERR_NOT_MERCHANT);
        require!(amount > 0u64, ERR_INVALID_AMOUNT);

        let balance = self.balances(ledger_id, &caller).get();
        require!(balance >= amount, ERR_INSUFFICIENT_BALANCE);

        self.balances(ledger_id, &caller).set(&balance - &amount);
        ledger.total_supply -= &amount;
        self.ledgers(ledger_id).set(&ledger);

        self.send()
            .direct_esdt(&caller, &ledger.underlying_asset, 0, &amount);

        self.redeemed_event(ledger_id, &caller, &amount);
    }

    // ========================================================
    // ENDPOINTS: merchant allowlist (controller)
    // ========================================================

    #[endpoint(addMerchant)]
    fn add_merchant(&self, ledger_id: u64, merchant: ManagedAddress) {
        let ledger = self.require_ledger(ledger_id);
        self.require_controller(&ledger);
        require!(!merchant.is_zero(), ERR_ZERO_ADDRESS);

        if self.merchants(ledger_id).insert(merchant.clone()) {
            self.merchant_added_event(ledger_id, &merchant);
        }
    }

    #[endpoint(removeMerchant)]
    fn remove_merchant(&self, ledger_id: u64, merchant: ManagedAddress) {
        let ledger = self.require_ledger(ledger_id);
        self.require_controller(&ledger);
        require!(
            self.merchants(ledger_id).swap_remove(&merchant),
            ERR_NOT_MERCHANT
        );

        self.merchant_removed_event(ledger_id, &merchant);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_ledger(&self, ledger_id: u64) -> Ledger<Self::Api> {
        require!(!self.ledgers(ledger_id).is_empty(), ERR_UNKNOWN_LEDGER);
        self.ledgers(ledger_id).get()
    }

    fn require_controller(&self, ledger: &Ledger<Self::Api>) {
        require!(
            self.blockchain().get_caller() == ledger.controller,
            ERR_NOT_CONTROLLER
        );
    }

    fn move_units(
        &self,
        ledger_id: u64,
        from: &ManagedAddress,
        to: &ManagedAddress,
        amount: &BigUint,
    ) {
        require!(*amount > 0u64, ERR_INVALID_AMOUNT);
        let from_balance = self.balances(ledger_id, from).get();
        require!(from_balance >= *amount, ERR_INSUFFICIENT_BALANCE);

        self.balances(ledger_id, from).set(&from_balance - amount);
        self.balances(ledger_id, to).update(|balance| *balance += amount);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getLedger)]
    fn get_ledger(&self, ledger_id: u64) -> Ledger<Self::Api> {
        self.require_ledger(ledger_id)
    }

    #[view(balanceOf)]
    fn balance_of(&self, ledger_id: u64, holder: &ManagedAddress) -> BigUint {
        self.balances(ledger_id, holder).get()
    }

    #[view(isMerchant)]
    fn is_merchant(&self, ledger_id: u64, merchant: &ManagedAddress) -> bool {
        self.merchants(ledger_id).contains(merchant)
    }

    #[view(getMerchants)]
    fn get_merchants(&self, ledger_id: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for merchant in self.merchants(ledger_id).iter() {
            result.push(merchant);
        }
        result
    }

    #[view(getLedgerCount)]
    fn get_ledger_count(&self) -> u64 {
        self.ledger_count().get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("ledgerCreated")]
    fn ledger_created_event(
        &self,
        #[indexed] ledger_id: u64,
        #[indexed] controller: &ManagedAddress,
        #[indexed] underlying_asset: &TokenIdentifier,
        transferable: bool,
    );

    #[event("minted")]
    fn minted_event(
        &self,
        #[indexed] ledger_id: u64,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("transfer")]
    fn transfer_event(
        &self,
        #[indexed] ledger_id: u64,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("merchantPayment")]
    fn merchant_payment_event(
        &self,
        #[indexed] ledger_id: u64,
        #[indexed] payer: &ManagedAddress,
        #[indexed] merchant: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("redeemed")]
    fn redeemed_event(
        &self,
        #[indexed] ledger_id: u64,
        #[indexed] merchant: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("merchantAdded")]
    fn merchant_added_event(&self, #[indexed] ledger_id: u64, #[indexed] merchant: &ManagedAddress);

    #[event("merchantRemoved")]
    fn merchant_removed_event(&self, #[indexed] ledger_id: u64, #[indexed] merchant: &ManagedAddress);

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("ledgerCount")]
    fn ledger_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("ledgers")]
    fn ledgers(&self, ledger_id: u64) -> SingleValueMapper<Ledger<Self::Api>>;

    #[storage_mapper("balances")]
    fn balances(&self, ledger_id: u64, holder: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("merchants")]
    fn merchants(&self, ledger_id: u64) -> UnorderedSetMapper<ManagedAddress>;
}
