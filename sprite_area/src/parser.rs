use nom::{
    bytes::complete::take,
    combinator::map,
    number::complete::le_u32,
    IResult as _IResult, Parser,
};

use crate::{
    constants::SPRITE_NAME_LENGTH, SpriteAreaHeader, SpriteFileHeader, SpriteName,
};

pub type IResult<'a, T> = _IResult<&'a [u8], T>;

pub fn parse_area_header(i: &'_ [u8]) -> IResult<'_, SpriteAreaHeader> {
    map(
        (le_u32, le_u32, le_u32, le_u32),
        |(size, sprite_count, first, used)| SpriteAreaHeader {
            size,
            sprite_count,
            first,
            used,
        },
    )
    .parse(i)
}

pub fn parse_file_header(i: &'_ [u8]) -> IResult<'_, SpriteFileHeader> {
    map((le_u32, le_u32, le_u32), |(sprite_count, first, used)| {
        SpriteFileHeader {
            sprite_count,
            first,
            used,
        }
    })
    .parse(i)
}

pub fn parse_sprite_name(i: &'_ [u8]) -> IResult<'_, SpriteName> {
    map(take(SPRITE_NAME_LENGTH), |name: &[u8]| {
        let mut bytes = [0u8; SPRITE_NAME_LENGTH];
        bytes.copy_from_slice(name);

        SpriteName(bytes)
    })
    .parse(i)
}

/// Only the part of a sprite header needed to step over it: size and name.
pub fn parse_record_prefix(i: &'_ [u8]) -> IResult<'_, (u32, SpriteName)> {
    (le_u32, parse_sprite_name).parse(i)
}
