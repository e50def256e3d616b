use alloy::primitives::{Address, U256};
use log::info;

use super::timelock_client::TimelockClient;
use crate::actions::timelock_action::TimelockAction;
use crate::types::{
    dispatch_decision::DispatchDecision, dispatch_error::DispatchError,
    privileged_call::PrivilegedCall,
};

/// Sends `call` through `timelock`: `schedule` with the decision's delay when
/// `decision.schedule` is set, `execute` otherwise.
///
/// Input is validated before anything is sent. Exactly one transaction is
/// submitted and awaited; it is never retried. Whether the operation exists,
/// is ready, or collides with an earlier one is decided by the timelock and
/// comes back as [`DispatchError::RemoteRejection`].
pub async fn dispatch<T: TimelockClient>(
    timelock: &T,
    call: &PrivilegedCall,
    decision: &DispatchDecision,
) -> Result<T::Receipt, DispatchError> {
    if timelock.address() == Address::ZERO {
        return Err(DispatchError::invalid("timelock address is the zero address"));
    }
    call.validate()?;

    if decision.schedule {
        info!(
            "Scheduling operation {} on {} with delay {}s",
            call.operation_id(),
            call.target,
            decision.delay_seconds
        );
        timelock
            .schedule(
                call.target,
                call.value,
                call.data.clone(),
                call.predecessor,
                call.salt,
                U256::from(decision.delay_seconds),
            )
            .await
    } else {
        info!(
            "Executing operation {} on {}",
            call.operation_id(),
            call.target
        );
        timelock
            .execute(
                call.target,
                call.value,
                call.data.clone(),
                call.predecessor,
                call.salt,
            )
            .await
    }
}

/// The timelock transaction [`dispatch`] would send, without sending it.
pub fn preview(
    timelock: Address,
    call: &PrivilegedCall,
    decision: &DispatchDecision,
) -> TimelockAction {
    TimelockAction::new(timelock, call.clone(), decision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::action::Action;
    use crate::actions::add_payee_action::AddPayee;
    use crate::actions::remove_payee_action::RemovePayee;
    use crate::bindings::gas_tank::GasTank;
    use crate::types::operation_state::OperationState;
    use alloy::primitives::{B256, Bytes, address};
    use alloy::sol_types::SolCall;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    const GAS_TANK: Address = address!("0xCfbCCC95E48D481128783Fa962a1828f47Fc8A42");
    const TIMELOCK: Address = address!("0x1111111111111111111111111111111111111111");
    const PAYEE: Address = address!("0xABCD000000000000000000000000000000000001");

    #[derive(Debug, Clone, PartialEq)]
    enum Recorded {
        Schedule {
            target: Address,
            value: U256,
            data: Bytes,
            predecessor: B256,
            salt: B256,
            delay: U256,
        },
        Execute {
            target: Address,
            value: U256,
            data: Bytes,
            predecessor: B256,
            salt: B256,
        },
    }

    /// Records every call and keeps the same bookkeeping as the on-chain
    /// timelock: one entry per operation id, ready once its delay has passed.
    #[derive(Default)]
    struct MockTimelock {
        now: Mutex<u64>,
        calls: Mutex<Vec<Recorded>>,
        ready_at: Mutex<HashMap<B256, u64>>,
        done: Mutex<Vec<B256>>,
    }

    impl MockTimelock {
        fn advance(&self, seconds: u64) {
            *self.now.lock().unwrap() += seconds;
        }

        fn recorded(&self) -> Vec<Recorded> {
            self.calls.lock().unwrap().clone()
        }

        fn id(target: Address, value: U256, data: Bytes, predecessor: B256, salt: B256) -> B256 {
            PrivilegedCall::new(target, value, data)
                .with_predecessor(predecessor)
                .with_salt(salt)
                .operation_id()
        }
    }

    #[async_trait]
    impl TimelockClient for MockTimelock {
        type Receipt = B256;

        fn address(&self) -> Address {
            TIMELOCK
        }

        async fn schedule(
            &self,
            target: Address,
            value: U256,
            data: Bytes,
            predecessor: B256,
            salt: B256,
            delay: U256,
        ) -> Result<B256, DispatchError> {
            self.calls.lock().unwrap().push(Recorded::Schedule {
                target,
                value,
                data: data.clone(),
                predecessor,
                salt,
                delay,
            });

            let id = Self::id(target, value, data, predecessor, salt);
            let mut ready_at = self.ready_at.lock().unwrap();
            if ready_at.contains_key(&id) {
                return Err(DispatchError::rejected(
                    "TimelockController: operation already scheduled",
                ));
            }
            ready_at.insert(id, *self.now.lock().unwrap() + delay.to::<u64>());
            Ok(id)
        }

        async fn execute(
            &self,
            target: Address,
            value: U256,
            data: Bytes,
            predecessor: B256,
            salt: B256,
        ) -> Result<B256, DispatchError> {
            self.calls.lock().unwrap().push(Recorded::Execute {
                target,
                value,
                data: data.clone(),
                predecessor,
                salt,
            });

            let id = Self::id(target, value, data, predecessor, salt);
            let now = *self.now.lock().unwrap();
            match self.ready_at.lock().unwrap().get(&id) {
                Some(at) if *at <= now && !self.done.lock().unwrap().contains(&id) => {
                    self.done.lock().unwrap().push(id);
                    Ok(id)
                }
                _ => Err(DispatchError::rejected(
                    "TimelockController: operation is not ready",
                )),
            }
        }

        async fn min_delay(&self) -> Result<U256, DispatchError> {
            Ok(U256::from(60))
        }

        async fn operation_state(&self, id: B256) -> Result<OperationState, DispatchError> {
            let done = self.done.lock().unwrap().contains(&id);
            let ready_at = self.ready_at.lock().unwrap().get(&id).copied();
            let now = *self.now.lock().unwrap();
            Ok(OperationState::from_flags(
                ready_at.is_some() && !done,
                ready_at.is_some_and(|at| at <= now) && !done,
                done,
            ))
        }
    }

    fn add_payee_call() -> PrivilegedCall {
        PrivilegedCall::from_action(&AddPayee::new(GAS_TANK, PAYEE))
    }

    #[tokio::test]
    async fn test_scheduled_add_payee() {
        let timelock = MockTimelock::default();
        dispatch(&timelock, &add_payee_call(), &DispatchDecision::scheduled(86_400))
            .await
            .unwrap();

        assert_eq!(
            timelock.recorded(),
            vec![Recorded::Schedule {
                target: GAS_TANK,
                value: U256::ZERO,
                data: Bytes::from(GasTank::addPayeeCall::new((PAYEE,)).abi_encode()),
                predecessor: B256::ZERO,
                salt: B256::ZERO,
                delay: U256::from(86_400),
            }]
        );
    }

    #[tokio::test]
    async fn test_immediate_remove_payee() {
        let timelock = MockTimelock::default();
        let call = PrivilegedCall::from_action(&RemovePayee::new(GAS_TANK, PAYEE));

        // Never scheduled, so the timelock refuses it; the path taken is what matters.
        let _ = dispatch(&timelock, &call, &DispatchDecision::immediate()).await;

        assert_eq!(
            timelock.recorded(),
            vec![Recorded::Execute {
                target: GAS_TANK,
                value: U256::ZERO,
                data: Bytes::from(GasTank::removePayeeCall::new((PAYEE,)).abi_encode()),
                predecessor: B256::ZERO,
                salt: B256::ZERO,
            }]
        );
    }

    #[tokio::test]
    async fn test_delay_passed_through_unchanged() {
        for delay in [0u64, 1, 60, 86_400, u64::MAX] {
            let timelock = MockTimelock::default();
            dispatch(&timelock, &add_payee_call(), &DispatchDecision::scheduled(delay))
                .await
                .unwrap();

            match &timelock.recorded()[..] {
                [Recorded::Schedule { delay: sent, .. }] => assert_eq!(*sent, U256::from(delay)),
                other => panic!("expected a single schedule, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_identical_calls_collide() {
        let timelock = MockTimelock::default();
        let decision = DispatchDecision::scheduled(60);

        let first = dispatch(&timelock, &add_payee_call(), &decision)
            .await
            .unwrap();
        let second = dispatch(&timelock, &add_payee_call(), &decision).await;

        assert_eq!(first, add_payee_call().operation_id());
        match second {
            Err(DispatchError::RemoteRejection { reason }) => {
                assert!(reason.contains("already scheduled"))
            }
            other => panic!("expected a rejection, got {other:?}"),
        }
        assert_eq!(timelock.recorded().len(), 2);
    }

    #[tokio::test]
    async fn test_salt_avoids_collision() {
        let timelock = MockTimelock::default();
        let decision = DispatchDecision::scheduled(60);
        let salted = add_payee_call().with_salt(B256::repeat_byte(0x01));

        dispatch(&timelock, &add_payee_call(), &decision)
            .await
            .unwrap();
        dispatch(&timelock, &salted, &decision).await.unwrap();
    }

    #[tokio::test]
    async fn test_execute_before_delay_is_rejected() {
        let timelock = MockTimelock::default();
        let call = add_payee_call();

        dispatch(&timelock, &call, &DispatchDecision::scheduled(86_400))
            .await
            .unwrap();
        timelock.advance(3_600);
        assert_eq!(
            timelock.operation_state(call.operation_id()).await.unwrap(),
            OperationState::Waiting
        );

        match dispatch(&timelock, &call, &DispatchDecision::immediate()).await {
            Err(DispatchError::RemoteRejection { reason }) => {
                assert!(reason.contains("not ready"))
            }
            other => panic!("expected a rejection, got {other:?}"),
        }

        timelock.advance(86_400);
        assert_eq!(
            timelock.operation_state(call.operation_id()).await.unwrap(),
            OperationState::Ready
        );
        dispatch(&timelock, &call, &DispatchDecision::immediate())
            .await
            .unwrap();
        assert_eq!(
            timelock.operation_state(call.operation_id()).await.unwrap(),
            OperationState::Done
        );
    }

    #[tokio::test]
    async fn test_invalid_input_sends_nothing() {
        let timelock = MockTimelock::default();
        let call = PrivilegedCall::new(Address::ZERO, U256::ZERO, Bytes::new());

        let result = dispatch(&timelock, &call, &DispatchDecision::scheduled(60)).await;

        assert!(matches!(result, Err(DispatchError::InvalidInput(_))));
        assert!(timelock.recorded().is_empty());
    }

    #[test]
    fn test_preview_matches_dispatch_path() {
        let call = add_payee_call();
        let scheduled = preview(TIMELOCK, &call, &DispatchDecision::scheduled(60));
        let immediate = preview(TIMELOCK, &call, &DispatchDecision::immediate());

        assert_eq!(scheduled.target(), TIMELOCK);
        assert_eq!(scheduled.describe()["action"], "Schedule");
        assert_eq!(immediate.describe()["action"], "Execute");
        assert_eq!(scheduled.operation_id(), immediate.operation_id());
    }
}
