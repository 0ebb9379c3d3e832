//! Chat object hierarchy used as dispatch fixtures.
//!
//! Shaped like a typical chat SDK: users and channels share abstract bases,
//! members behave like users without inheriting from the concrete user type.

#![allow(dead_code)]

use dango_utils::{Described, TypeDescriptor};

pub static HASHABLE: TypeDescriptor = TypeDescriptor::new("Hashable", &[], None);
pub static SNOWFLAKE: TypeDescriptor = TypeDescriptor::new("abc.Snowflake", &[], None);
pub static MESSAGEABLE: TypeDescriptor = TypeDescriptor::new("abc.Messageable", &[], None);

pub static ABSTRACT_USER: TypeDescriptor =
    TypeDescriptor::new("abc.User", &[&SNOWFLAKE], None);
pub static BASE_USER: TypeDescriptor =
    TypeDescriptor::new("BaseUser", &[&ABSTRACT_USER, &HASHABLE], None);
pub static USER: TypeDescriptor =
    TypeDescriptor::new("User", &[&MESSAGEABLE], Some(&BASE_USER));
pub static CLIENT_USER: TypeDescriptor = TypeDescriptor::new("ClientUser", &[], Some(&BASE_USER));
pub static MEMBER: TypeDescriptor =
    TypeDescriptor::new("Member", &[&MESSAGEABLE, &ABSTRACT_USER], None);

pub static GUILD_CHANNEL: TypeDescriptor =
    TypeDescriptor::new("abc.GuildChannel", &[&SNOWFLAKE], None);
pub static TEXT_CHANNEL: TypeDescriptor =
    TypeDescriptor::new("TextChannel", &[&MESSAGEABLE, &GUILD_CHANNEL, &HASHABLE], None);
pub static VOICE_CHANNEL: TypeDescriptor =
    TypeDescriptor::new("VoiceChannel", &[&GUILD_CHANNEL, &HASHABLE], None);
pub static DM_CHANNEL: TypeDescriptor =
    TypeDescriptor::new("DMChannel", &[&MESSAGEABLE, &HASHABLE], None);

pub static GUILD: TypeDescriptor = TypeDescriptor::new("Guild", &[&HASHABLE], None);

/// A chat object carrying its declared type.
#[derive(Debug)]
pub struct ChatObject {
    pub id: u64,
    pub kind: &'static TypeDescriptor,
}

impl ChatObject {
    pub fn new(id: u64, kind: &'static TypeDescriptor) -> Self {
        Self { id, kind }
    }
}

impl Described for ChatObject {
    fn descriptor(&self) -> &'static TypeDescriptor {
        self.kind
    }
}
