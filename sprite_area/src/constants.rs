/// Header as held in memory, including the leading area size word.
pub const SPRITE_AREA_HEADER_LENGTH: u32 = 16;
/// Header as stored in a sprite file. The area size word is never saved.
pub const SPRITE_FILE_HEADER_LENGTH: u32 = 12;

pub const SPRITE_NAME_LENGTH: usize = 12;
/// Size word plus name. Anything shorter cannot be stepped over.
pub const SPRITE_RECORD_MIN_LENGTH: u32 = 16;

pub const SPRITE_FILE_TYPE: u16 = 0xff9;
