//! Property tests for native panic narrowing.

use np_common::{is_native_panic, Error, ModuleError, NativePanic, ProcessResult, Subsystem};
use proptest::prelude::*;

fn subsystem_strategy() -> impl Strategy<Value = Subsystem> {
    prop::sample::select(Subsystem::ALL.to_vec())
}

proptest! {
    #[test]
    fn constructed_panics_always_narrow(
        message in ".*",
        stack in ".*",
        subsystem in subsystem_strategy(),
    ) {
        let panic = NativePanic::new(message.clone(), stack.clone(), serde_json::Value::Null, subsystem);
        prop_assert!(is_native_panic(&panic));

        let err = Error::from(panic);
        prop_assert!(is_native_panic(&err));
        let narrowed = err.as_panic().unwrap();
        prop_assert_eq!(narrowed.message(), message.as_str());
        prop_assert_eq!(narrowed.native_stack(), stack.as_str());
        prop_assert_eq!(narrowed.subsystem(), subsystem);
    }

    #[test]
    fn ordinary_errors_never_narrow(message in ".*", name in "[A-Za-z]{1,16}", code in any::<i32>()) {
        let io = std::io::Error::new(std::io::ErrorKind::Other, message.clone());
        prop_assert!(!is_native_panic(&io));

        let module = ModuleError::new(name, message);
        prop_assert!(!is_native_panic(&module));

        let process = Error::Process(ProcessResult::exited(code));
        prop_assert!(!is_native_panic(&process));
    }

    #[test]
    fn wire_names_parse_back(subsystem in subsystem_strategy()) {
        let parsed: Subsystem = subsystem.to_string().parse().unwrap();
        prop_assert_eq!(parsed, subsystem);
    }
}
