mod in_memory_match_store;
