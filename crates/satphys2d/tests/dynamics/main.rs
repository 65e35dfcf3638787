mod floor_bounce;
mod head_on;
mod pair_order;
mod triggers;
mod world_lifecycle;
