pub mod agents;
pub mod board;
pub mod evaluate;
pub mod game;
pub mod input_handler;
pub mod rules;
pub mod searcher;
pub mod shobu_move;
pub mod shobu_search;
