use bytemuck::{Pod, Zeroable};

use super::traits::DrawTarget;
use crate::api::types::Rgb;

/// Primitive tag stored in `DrawCommand::kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CommandKind {
    Clear = 0,
    Circle = 1,
    Column = 2,
}

impl CommandKind {
    pub fn from_f32(kind: f32) -> Option<Self> {
        match kind as u8 {
            0 => Some(Self::Clear),
            1 => Some(Self::Circle),
            2 => Some(Self::Column),
            _ => None,
        }
    }
}

/// One recorded draw call, read by the JavaScript canvas renderer.
/// Must match the JS protocol: 8 floats = 32 bytes stride.
///
/// Geometry slots by kind:
/// - Clear: unused
/// - Circle: `a` = x, `b` = y, `c` = radius
/// - Column: `a` = x0, `b` = x1, `c` = y_top, `d` = y_bottom
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct DrawCommand {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    /// Color channels, 0.0-1.0.
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl DrawCommand {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    fn new(kind: CommandKind, geometry: [f32; 4], color: Rgb) -> Self {
        let [red, green, blue] = color.to_unit();
        let [a, b, c, d] = geometry;
        Self { kind: kind as u8 as f32, a, b, c, d, red, green, blue }
    }

    pub fn kind(&self) -> Option<CommandKind> {
        CommandKind::from_f32(self.kind)
    }
}

/// Draw target that records commands into a flat buffer.
pub struct CommandBuffer {
    commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn command_count(&self) -> u32 {
        self.commands.len() as u32
    }

    /// Commands viewed as one contiguous float slice.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.commands)
    }

    /// Raw pointer to command data for direct reads from WASM memory.
    pub fn commands_ptr(&self) -> *const f32 {
        self.commands.as_ptr() as *const f32
    }
}

impl Default for CommandBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawTarget for CommandBuffer {
    fn clear(&mut self, color: Rgb) {
        self.commands
            .push(DrawCommand::new(CommandKind::Clear, [0.0; 4], color));
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgb) {
        self.commands
            .push(DrawCommand::new(CommandKind::Circle, [x, y, radius, 0.0], color));
    }

    fn fill_column_rect(&mut self, x0: f32, x1: f32, y_top: f32, y_bottom: f32, color: Rgb) {
        self.commands
            .push(DrawCommand::new(CommandKind::Column, [x0, x1, y_top, y_bottom], color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_command_is_8_floats() {
        assert_eq!(std::mem::size_of::<DrawCommand>(), 32);
        assert_eq!(DrawCommand::FLOATS, 8);
    }

    #[test]
    fn records_calls_in_order() {
        let mut buf = CommandBuffer::new();
        buf.clear(Rgb::BACKGROUND);
        buf.fill_circle(3.0, 4.0, 2.0, Rgb::SNOW);
        buf.fill_column_rect(5.0, 6.0, 80.0, 100.0, Rgb::SNOW);

        assert_eq!(buf.command_count(), 3);
        let kinds: Vec<_> = buf.commands().iter().map(|c| c.kind()).collect();
        assert_eq!(
            kinds,
            vec![Some(CommandKind::Clear), Some(CommandKind::Circle), Some(CommandKind::Column)]
        );

        let col = buf.commands()[2];
        assert_eq!((col.a, col.b, col.c, col.d), (5.0, 6.0, 80.0, 100.0));
        assert_eq!((col.red, col.green, col.blue), (1.0, 1.0, 1.0));
    }

    #[test]
    fn float_view_matches_layout() {
        let mut buf = CommandBuffer::new();
        buf.fill_circle(7.0, 8.0, 3.0, Rgb::new(0, 0, 255));
        let floats = buf.as_floats();
        assert_eq!(floats.len(), DrawCommand::FLOATS);
        assert_eq!(&floats[..4], &[1.0, 7.0, 8.0, 3.0]);
        assert_eq!(floats[7], 1.0);
    }

    #[test]
    fn clear_commands_empties_buffer() {
        let mut buf = CommandBuffer::new();
        buf.clear(Rgb::BACKGROUND);
        buf.clear_commands();
        assert_eq!(buf.command_count(), 0);
    }

    #[test]
    fn unknown_kind_decodes_to_none() {
        assert_eq!(CommandKind::from_f32(9.0), None);
    }
}
