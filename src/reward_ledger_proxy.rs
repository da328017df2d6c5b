use multiversx_sc::proxy_imports::*;

pub struct RewardLedgerProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for RewardLedgerProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = RewardLedgerProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        RewardLedgerProxyMethods { wrapped_tx: tx }
    }
}

pub struct RewardLedgerProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> RewardLedgerProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init(self) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .original_result()
    }
}

impl<Env, From, To, Gas> RewardLedgerProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn create_ledger<
        Arg0: ProxyArg<TokenIdentifier<Env::Api>>,
        Arg1: ProxyArg<bool>,
        Arg2: ProxyArg<ManagedVec<Env::Api, ManagedAddress<Env::Api>>>,
    >(
        self,
        underlying_asset: Arg0,
        transferable: Arg1,
        merchants: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("createLedger")
            .argument(&underlying_asset)
            .argument(&transferable)
            .argument(&merchants)
            .original_result()
    }

    /// Payable in the ledger's underlying asset; credits the caller.
    pub fn mint<Arg0: ProxyArg<u64>>(
        self,
        ledger_id: Arg0,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("mint")
            .argument(&ledger_id)
            .original_result()
    }

    pub fn transfer<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        ledger_id: Arg0,
        to: Arg1,
        amount: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("transfer")
            .argument(&ledger_id)
            .argument(&to)
            .argument(&amount)
            .original_result()
    }

    pub fn pay_to_merchant<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        ledger_id: Arg0,
        merchant: Arg1,
        amount: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("payToMerchant")
            .argument(&ledger_id)
            .argument(&merchant)
            .argument(&amount)
            .original_result()
    }

    pub fn redeem<Arg0: ProxyArg<u64>, Arg1: ProxyArg<BigUint<Env::Api>>>(
        self,
        ledger_id: Arg0,
        amount: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("redeem")
            .argument(&ledger_id)
            .argument(&amount)
            .original_result()
    }

    pub fn add_merchant<Arg0: ProxyArg<u64>, Arg1: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        ledger_id: Arg0,
        merchant: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("addMerchant")
            .argument(&ledger_id)
            .argument(&merchant)
            .original_result()
    }

    pub fn remove_merchant<Arg0: ProxyArg<u64>, Arg1: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        ledger_id: Arg0,
        merchant: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("removeMerchant")
            .argument(&ledger_id)
            .argument(&merchant)
            .original_result()
    }

    pub fn balance_of<Arg0: ProxyArg<u64>, Arg1: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        ledger_id: Arg0,
        holder: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("balanceOf")
            .argument(&ledger_id)
            .argument(&holder)
            .original_result()
    }

    pub fn is_merchant<Arg0: ProxyArg<u64>, Arg1: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        ledger_id: Arg0,
        merchant: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isMerchant")
            .argument(&ledger_id)
            .argument(&merchant)
            .original_result()
    }
}
