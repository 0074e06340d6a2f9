mod classifier_contract;
mod cli;
mod day_plan;
mod facilitator_flow;
mod transitions;
mod validator;
