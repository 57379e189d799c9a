#![cfg(test)]

mod pipeline;
mod support;
