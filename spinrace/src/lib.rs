pub mod cas_lock;
pub mod deadline;
pub mod lock;
pub mod raw_lock;
pub mod ticket_lock;
pub mod wait;

#[cfg(test)]
pub mod test_utils;
