use super::*;

#[test]
fn internal_crates() {
    assert!(is_internal("backtrace::backtrace::trace"));
    assert!(is_internal("tdb_stack::trace::StackTrace::capture"));
    assert!(is_internal("tdb_trace::emitter::Tracer<O,E,S>::emit"));
    assert!(is_internal("tdbg::trace_out"));
    assert!(is_internal(
        "<tdb_trace::emitter::CapturedFrames as tdb_trace::emitter::FrameSource>::frames"
    ));
}

#[test]
fn test_modules_are_callers() {
    assert!(!is_internal("tdb_stack::trace::tests::capture_limit"));
    assert!(!is_internal("tdb_trace::emitter::tests::trace_out_writes"));
}

#[test]
fn user_code_is_not_internal() {
    assert!(!is_internal("my_app::main"));
    assert!(!is_internal("tdb::run_demo"));
    assert!(!is_internal("tdbgx::helper"));
}

#[test]
fn runtime_noise() {
    assert!(is_noise("std::rt::lang_start_internal"));
    assert!(is_noise("std::panicking::try::do_call"));
    assert!(is_noise("test::run_test::{{closure}}"));
    assert!(is_noise("std::sys::backtrace::__rust_begin_short_backtrace"));
    assert!(is_noise("core::ops::function::FnOnce::call_once"));
    assert!(is_noise(
        "<alloc::boxed::Box<F,A> as core::ops::function::FnOnce<Args>>::call_once"
    ));
    assert!(is_noise("<&mut F as core::ops::function::FnMut<A>>::call_mut"));
    assert!(is_noise("__libc_start_main"));
    assert!(is_noise("_Unwind_Backtrace"));
    assert!(is_noise("main"));
    assert!(is_noise("__rust_try"));
    assert!(is_noise("clone3"));
    assert!(is_noise("__clone"));
}

#[test]
fn user_code_is_not_noise() {
    assert!(!is_noise("my_app::main"));
    assert!(!is_noise("testkit::run"));
    assert!(!is_noise("my_app::worker::{{closure}}"));
}

#[test]
fn harness_closure_wraps_its_function() {
    assert!(is_wrapper_closure(
        "my_app::tests::parses::{{closure}}",
        "my_app::tests::parses"
    ));
    assert!(is_wrapper_closure(
        "<my_app::Parser>::run::{{closure}}",
        "<my_app::Parser>::run"
    ));
}

#[test]
fn other_closures_are_kept() {
    // A closure defined elsewhere.
    assert!(!is_wrapper_closure(
        "my_app::worker::{{closure}}",
        "my_app::tests::parses"
    ));
    // Nested closures are not the wrapper of the outer function.
    assert!(!is_wrapper_closure(
        "my_app::run::{{closure}}::{{closure}}",
        "my_app::run"
    ));
    assert!(!is_wrapper_closure("my_app::run", "my_app::run"));
}
