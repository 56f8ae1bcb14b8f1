pub mod leaves;
