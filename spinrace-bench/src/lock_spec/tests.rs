use std::sync::Arc;
use std::thread;
use crate::lock_spec::{LockSpec, CAS, CONTENDERS, PARKING, TICKET};

#[test]
fn contenders_in_column_order() {
    let names = CONTENDERS.iter().map(|spec| spec.name).collect::<Vec<_>>();
    assert_eq!(vec!["TicketLock", "CASLock"], names);
}

#[test]
fn fresh_instance_per_call() {
    for spec in [TICKET, CAS, PARKING] {
        let first = (spec.new)();
        let second = (spec.new)();
        assert!(!Arc::ptr_eq(&first, &second), "{}", spec.name);

        // holding one instance leaves the other untouched
        first.acquire();
        assert!(second.try_acquire(), "{}", spec.name);
        second.release();
        first.release();
    }
}

#[test]
fn shared_across_threads() {
    for spec in [TICKET, CAS, PARKING] {
        takes_owned(spec);
    }
}

fn takes_owned(spec: LockSpec) {
    let lock = (spec.new)();
    lock.acquire();
    let t_2 = {
        let lock = lock.clone();
        thread::spawn(move || {
            assert!(!lock.try_acquire());
        })
    };
    t_2.join().unwrap();
    lock.release();
}
