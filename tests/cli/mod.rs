mod errors;
mod experiment;
mod nodes;
mod path;
mod reachable;
