use crate::Usize;

pub trait Sailed {}

impl Sailed for Usize<1> {}
impl Sailed for Usize<2> {}
impl Sailed for Usize<3> {}
impl Sailed for Usize<4> {}
impl Sailed for Usize<5> {}
impl Sailed for Usize<6> {}
impl Sailed for Usize<7> {}
impl Sailed for Usize<8> {}

impl crate::MigrationBatch for Usize<1> {}
impl crate::MigrationBatch for Usize<2> {}
impl crate::MigrationBatch for Usize<3> {}
impl crate::MigrationBatch for Usize<4> {}
impl crate::MigrationBatch for Usize<5> {}
impl crate::MigrationBatch for Usize<6> {}
impl crate::MigrationBatch for Usize<7> {}
impl crate::MigrationBatch for Usize<8> {}
