//! Name table for the primitive library.

use ksu_value::{Code, Environment, Value};
use rustc_hash::FxHashMap;

use super::{arithmetic, boxes, comparison, control, io, lists, logic, pairs, predicates, symbols};

/// Every primitive, by the name generated code refers to it with.
const PRIMITIVES: &[(&str, Code)] = &[
    // Arithmetic
    ("+", arithmetic::add),
    ("-", arithmetic::sub),
    ("*", arithmetic::mul),
    ("/", arithmetic::div),
    ("mod", arithmetic::rem),
    // Comparison
    ("<", comparison::lt),
    (">", comparison::gt),
    ("<=", comparison::le),
    (">=", comparison::ge),
    ("=", comparison::eq),
    ("!=", comparison::ne),
    // Logic
    ("and", logic::and),
    ("or", logic::or),
    ("not", logic::not),
    // Pairs
    ("pair", pairs::pair),
    ("fst", pairs::fst),
    ("snd", pairs::snd),
    ("car", pairs::car),
    ("cdr", pairs::cdr),
    // Predicates
    ("pair?", predicates::is_pair),
    ("nil?", predicates::is_nil),
    ("bool?", predicates::is_bool),
    ("number?", predicates::is_number),
    ("symbol?", predicates::is_symbol),
    ("string?", predicates::is_string),
    ("closure?", predicates::is_closure),
    ("procedure?", predicates::is_closure),
    ("list?", predicates::is_list),
    // Lists
    ("list-ref", lists::list_ref),
    // Boxes
    ("box", boxes::make_box),
    ("set!", boxes::set),
    ("unwrap", boxes::unwrap),
    ("peek", boxes::peek),
    // Symbols
    ("string->symbol", symbols::string_to_symbol),
    // I/O
    ("print", io::print),
    ("raise", io::raise),
    // Control
    ("halt", control::halt),
    ("call/cc", control::call_cc),
];

thread_local! {
    static TABLE: FxHashMap<&'static str, Value> = PRIMITIVES
        .iter()
        .map(|&(name, code)| (name, Value::closure(code, Environment::empty())))
        .collect();
}

/// The closure for the primitive called `name`, if there is one.
///
/// Repeated lookups on one thread return the same closure.
pub fn primitive(name: &str) -> Option<Value> {
    TABLE.with(|table| table.get(name).cloned())
}

/// Names of all primitives, in table order.
pub fn primitive_names() -> impl Iterator<Item = &'static str> {
    PRIMITIVES.iter().map(|&(name, _)| name)
}
