mod support;

mod combinators;
mod lookup;
mod transaction;
mod types;
mod validator;
