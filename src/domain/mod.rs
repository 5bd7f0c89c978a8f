// Domain layer: the invocation record, the status report and the ports the engine runs against.

pub mod model;
pub mod ports;
