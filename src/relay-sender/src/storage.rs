use stylus_sdk::{alloy_primitives::Address, prelude::*};

sol_storage! {
    /// Address slot that can be written exactly once; `Address::ZERO` means unset.
    pub struct WriteOnceAddress {
        address value;
    }
}

impl WriteOnceAddress {
    pub fn get(&self) -> Address {
        self.value.get()
    }

    pub fn is_set(&self) -> bool {
        self.value.get() != Address::ZERO
    }

    /// Stores `value` if the slot is still empty, otherwise returns the existing value.
    pub fn set_once(&mut self, value: Address) -> Result<(), Address> {
        let current = self.value.get();
        if current != Address::ZERO {
            return Err(current);
        }
        self.value.set(value);
        Ok(())
    }
}
