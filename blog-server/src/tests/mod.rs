mod http;
mod memory_store;
