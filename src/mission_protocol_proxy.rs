use multiversx_sc::proxy_imports::*;

use crate::types::{
    DataHash, Mission, MissionProposal, MissionStatus, ProtocolConfig, UserParticipation,
};

pub struct MissionProtocolProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for MissionProtocolProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = MissionProtocolProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        MissionProtocolProxyMethods { wrapped_tx: tx }
    }
}

pub struct MissionProtocolProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> MissionProtocolProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<OptionalValue<u64>>,
    >(
        self,
        reward_ledger_address: Arg0,
        max_attestation_age: Arg1,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&reward_ledger_address)
            .argument(&max_attestation_age)
            .original_result()
    }
}

impl<Env, From, To, Gas> MissionProtocolProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn create_proposal<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg2: ProxyArg<BigUint<Env::Api>>,
        Arg3: ProxyArg<u64>,
        Arg4: ProxyArg<u64>,
        Arg5: ProxyArg<ManagedVec<Env::Api, ManagedAddress<Env::Api>>>,
        Arg6: ProxyArg<ManagedVec<Env::Api, ManagedAddress<Env::Api>>>,
        Arg7: ProxyArg<bool>,
    >(
        self,
        name: Arg0,
        description: Arg1,
        total_budget: Arg2,
        start_date: Arg3,
        end_date: Arg4,
        verifiers: Arg5,
        merchants: Arg6,
        transferable: Arg7,
    ) -> TxTypedCall<Env, From, To, (), Gas, u64> {
        self.wrapped_tx
            .raw_call("createProposal")
            .argument(&name)
            .argument(&description)
            .argument(&total_budget)
            .argument(&start_date)
            .argument(&end_date)
            .argument(&verifiers)
            .argument(&merchants)
            .argument(&transferable)
            .original_result()
    }

    pub fn cancel_proposal<
        Arg0: ProxyArg<u64>,
    >(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("cancelProposal")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn approve_proposal<
        Arg0: ProxyArg<u64>,
    >(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("approveProposal")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn mint_badge<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u64>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        recipient: Arg0,
        mission_id: Arg1,
        metadata_ref: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("mintBadge")
            .argument(&recipient)
            .argument(&mission_id)
            .argument(&metadata_ref)
            .original_result()
    }

    pub fn submit_attestation<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u64>,
        Arg2: ProxyArg<u32>,
        Arg3: ProxyArg<DataHash<Env::Api>>,
        Arg4: ProxyArg<BigUint<Env::Api>>,
        Arg5: ProxyArg<ManagedAddress<Env::Api>>,
        Arg6: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        user: Arg0,
        mission_id: Arg1,
        date: Arg2,
        data_hash: Arg3,
        reward: Arg4,
        verifier: Arg5,
        signature: Arg6,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("submitAttestation")
            .argument(&user)
            .argument(&mission_id)
            .argument(&date)
            .argument(&data_hash)
            .argument(&reward)
            .argument(&verifier)
            .argument(&signature)
            .original_result()
    }

    pub fn submit_batch_attestation<
        Arg0: ProxyArg<ManagedVec<Env::Api, ManagedAddress<Env::Api>>>,
        Arg1: ProxyArg<u64>,
        Arg2: ProxyArg<u32>,
        Arg3: ProxyArg<ManagedVec<Env::Api, DataHash<Env::Api>>>,
        Arg4: ProxyArg<ManagedVec<Env::Api, BigUint<Env::Api>>>,
        Arg5: ProxyArg<ManagedAddress<Env::Api>>,
        Arg6: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        users: Arg0,
        mission_id: Arg1,
        date: Arg2,
        data_hashes: Arg3,
        rewards: Arg4,
        verifier: Arg5,
        signature: Arg6,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("submitBatchAttestation")
            .argument(&users)
            .argument(&mission_id)
            .argument(&date)
            .argument(&data_hashes)
            .argument(&rewards)
            .argument(&verifier)
            .argument(&signature)
            .original_result()
    }

    pub fn add_mission_budget<
        Arg0: ProxyArg<u64>,
    >(
        self,
        mission_id: Arg0,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("addMissionBudget")
            .argument(&mission_id)
            .original_result()
    }

    pub fn set_mission_total_budget<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        mission_id: Arg0,
        new_total_budget: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setMissionTotalBudget")
            .argument(&mission_id)
            .argument(&new_total_budget)
            .original_result()
    }

    pub fn set_max_attestation_age<
        Arg0: ProxyArg<u64>,
    >(
        self,
        days: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setMaxAttestationAge")
            .argument(&days)
            .original_result()
    }

    pub fn set_default_verifier<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        verifier: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setDefaultVerifier")
            .argument(&verifier)
            .original_result()
    }

    pub fn set_badge_registry<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        badge_registry: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setBadgeRegistry")
            .argument(&badge_registry)
            .original_result()
    }

    pub fn transfer_ownership<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        new_owner: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("transferOwnership")
            .argument(&new_owner)
            .original_result()
    }

    pub fn set_mission_end_date<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        mission_id: Arg0,
        new_end_date: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setMissionEndDate")
            .argument(&mission_id)
            .argument(&new_end_date)
            .original_result()
    }

    pub fn update_mission_end_date<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        mission_id: Arg0,
        new_end_date: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("updateMissionEndDate")
            .argument(&mission_id)
            .argument(&new_end_date)
            .original_result()
    }

    pub fn change_mission_status<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<MissionStatus>,
    >(
        self,
        mission_id: Arg0,
        status: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("changeMissionStatus")
            .argument(&mission_id)
            .argument(&status)
            .original_result()
    }

    pub fn emergency_change_mission_status<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<MissionStatus>,
    >(
        self,
        mission_id: Arg0,
        status: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("emergencyChangeMissionStatus")
            .argument(&mission_id)
            .argument(&status)
            .original_result()
    }

    pub fn add_verifier<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        mission_id: Arg0,
        verifier: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("addVerifier")
            .argument(&mission_id)
            .argument(&verifier)
            .original_result()
    }

    pub fn remove_verifier<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        mission_id: Arg0,
        verifier: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("removeVerifier")
            .argument(&mission_id)
            .argument(&verifier)
            .original_result()
    }

    pub fn emergency_add_verifier<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        mission_id: Arg0,
        verifier: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("emergencyAddVerifier")
            .argument(&mission_id)
            .argument(&verifier)
            .original_result()
    }

    pub fn emergency_remove_verifier<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        mission_id: Arg0,
        verifier: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("emergencyRemoveVerifier")
            .argument(&mission_id)
            .argument(&verifier)
            .original_result()
    }

    pub fn add_merchant<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        mission_id: Arg0,
        merchant: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("addMerchant")
            .argument(&mission_id)
            .argument(&merchant)
            .original_result()
    }

    pub fn remove_merchant<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        mission_id: Arg0,
        merchant: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("removeMerchant")
            .argument(&mission_id)
            .argument(&merchant)
            .original_result()
    }

    pub fn get_mission<
        Arg0: ProxyArg<u64>,
    >(
        self,
        mission_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Mission<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getMission")
            .argument(&mission_id)
            .original_result()
    }

    pub fn get_proposal<
        Arg0: ProxyArg<u64>,
    >(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MissionProposal<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposal")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn get_remaining_budget<
        Arg0: ProxyArg<u64>,
    >(
        self,
        mission_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getRemainingBudget")
            .argument(&mission_id)
            .original_result()
    }

    pub fn get_user_participation<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        mission_id: Arg0,
        user: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, UserParticipation<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getUserParticipation")
            .argument(&mission_id)
            .argument(&user)
            .original_result()
    }

    pub fn get_completion_count<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        mission_id: Arg0,
        user: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCompletionCount")
            .argument(&mission_id)
            .argument(&user)
            .original_result()
    }

    pub fn get_mission_verifiers<
        Arg0: ProxyArg<u64>,
    >(
        self,
        mission_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getMissionVerifiers")
            .argument(&mission_id)
            .original_result()
    }

    pub fn is_mission_verifier<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        mission_id: Arg0,
        verifier: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isMissionVerifier")
            .argument(&mission_id)
            .argument(&verifier)
            .original_result()
    }

    pub fn get_attestation_digest<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u64>,
        Arg2: ProxyArg<u32>,
        Arg3: ProxyArg<DataHash<Env::Api>>,
    >(
        self,
        user: Arg0,
        mission_id: Arg1,
        date: Arg2,
        data_hash: Arg3,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, DataHash<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAttestationDigest")
            .argument(&user)
            .argument(&mission_id)
            .argument(&date)
            .argument(&data_hash)
            .original_result()
    }

    pub fn is_attestation_processed<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u64>,
        Arg2: ProxyArg<u32>,
        Arg3: ProxyArg<DataHash<Env::Api>>,
    >(
        self,
        user: Arg0,
        mission_id: Arg1,
        date: Arg2,
        data_hash: Arg3,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isAttestationProcessed")
            .argument(&user)
            .argument(&mission_id)
            .argument(&date)
            .argument(&data_hash)
            .original_result()
    }

    pub fn get_current_date(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u32> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCurrentDate")
            .original_result()
    }

    pub fn get_max_attestation_age(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getMaxAttestationAge")
            .original_result()
    }

    pub fn get_default_verifier(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getDefaultVerifier")
            .original_result()
    }

    pub fn get_owner(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getOwner")
            .original_result()
    }

    pub fn get_proposal_count(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposalCount")
            .original_result()
    }

    pub fn get_mission_count(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getMissionCount")
            .original_result()
    }

    pub fn get_protocol_config(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ProtocolConfig<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProtocolConfig")
            .original_result()
    }
}
