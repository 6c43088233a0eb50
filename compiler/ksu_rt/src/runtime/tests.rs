#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use ksu_value::{args, EvalErrorKind};
use pretty_assertions::assert_eq;

use super::*;
use crate::builtins::primitive;
use crate::print_handler::{active_print_handler, buffer_handler, silent_handler};

fn quiet_runtime(handler: SharedPrintHandler) -> Runtime {
    Runtime::builder()
        .print_handler(handler)
        .init_tracing(false)
        .build()
}

#[test]
fn default_config_prints_to_stdout() {
    let config = RuntimeConfig::default();
    assert!(matches!(
        *config.print_handler,
        crate::print_handler::PrintHandlerImpl::Stdout
    ));
    assert!(config.init_tracing);
}

#[test]
fn builder_overrides_config() {
    let buffer = buffer_handler();
    let runtime = quiet_runtime(Arc::clone(&buffer));
    assert!(Arc::ptr_eq(runtime.print_handler(), &buffer));
    assert!(!runtime.config.init_tracing);
}

#[test]
fn run_captures_print_output() {
    let runtime = quiet_runtime(buffer_handler());
    let print = primitive("print").unwrap();
    let halt = primitive("halt").unwrap();

    let result = runtime.call(&print, args![Value::symbol("hello"), halt]);
    assert_eq!(result.unwrap(), Value::Nil);
    assert_eq!(
        runtime.print_handler().captured().as_deref(),
        Some("'hello\n")
    );
}

#[test]
fn run_restores_previous_handler() {
    let before = active_print_handler();
    let runtime = quiet_runtime(silent_handler());
    let halt = primitive("halt").unwrap();
    runtime.call(&halt, args![Value::Nil]).unwrap();
    assert!(Arc::ptr_eq(&active_print_handler(), &before));
}

#[test]
fn run_restores_previous_handler_after_error() {
    let before = active_print_handler();
    let runtime = quiet_runtime(buffer_handler());
    let div = primitive("/").unwrap();
    let halt = primitive("halt").unwrap();

    let err = runtime
        .call(&div, args![Value::Number(1), Value::Number(0), halt])
        .unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
    assert!(Arc::ptr_eq(&active_print_handler(), &before));
}

#[test]
fn call_rejects_non_closure() {
    let runtime = quiet_runtime(silent_handler());
    let err = runtime.call(&Value::Nil, Args::new()).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::CallOnNonClosure { .. }));
}
