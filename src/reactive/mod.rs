mod memo;

pub use memo::Memo;
